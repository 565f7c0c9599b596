use propref::{method_ref, MethodRef};

pub struct Sensor {
    reading: f64,
}

#[allow(non_snake_case)]
impl Sensor {
    pub fn getReading(&self) -> f64 {
        self.reading
    }
}

fn main() {
    let reading: MethodRef<Sensor> = method_ref!(Sensor::getReading);
    assert_eq!(propref::field_name(&reading).unwrap(), "reading");
    assert_eq!(Sensor { reading: 1.0 }.getReading(), 1.0);
}
