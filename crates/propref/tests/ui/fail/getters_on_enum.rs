use propref::Getters;

#[derive(Getters)]
enum Status { Active }

fn main() {
    let _ = Status::Active;
}
