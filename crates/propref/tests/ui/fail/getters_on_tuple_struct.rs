use propref::Getters;

#[derive(Getters)]
struct Pair(u8, u8);

fn main() {
    let pair = Pair(1, 2);
    let _ = pair.0 + pair.1;
}
