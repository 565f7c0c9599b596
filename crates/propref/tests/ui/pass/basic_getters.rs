use propref::Getters;

#[derive(Getters)]
pub struct Account {
    owner_name: String,
    enabled: bool,
    #[getter(skip)]
    secret: String,
}

fn main() {
    let account = Account {
        owner_name: "ada".to_string(),
        enabled: true,
        secret: String::new(),
    };

    let _: &String = account.getOwnerName();
    let _: bool = account.isEnabled();
    let _ = &account.secret;
    assert_eq!(Account::ACCESSORS.len(), 2);
}
