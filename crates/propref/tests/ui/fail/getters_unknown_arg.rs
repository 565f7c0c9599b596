use propref::Getters;

#[derive(Getters)]
struct User {
    #[getter(rename = "login")]
    name: String,
}

fn main() {
    let user = User { name: String::new() };
    let _ = user.name;
}
