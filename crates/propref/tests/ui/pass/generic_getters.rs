use propref::Getters;

#[derive(Getters)]
pub struct Envelope<T>
where
    T: Clone,
{
    payload: T,
    retries: u32,
}

fn main() {
    let envelope = Envelope {
        payload: "body".to_string(),
        retries: 1,
    };

    let _: &String = envelope.getPayload();
    let _: &u32 = envelope.getRetries();
    assert_eq!(<Envelope<String> as Getters>::ACCESSORS.len(), 2);
}
