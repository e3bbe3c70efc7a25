use catalog_macros::value_object;
use std::collections::HashSet;

#[value_object]
struct Email(String);

#[value_object(debug = false)]
struct Secret(String);

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Secret(..)")
    }
}

#[value_object]
enum Currency {
    Brl,
    Usd,
}

fn main() {
    let a = Email("a@b.c".to_string());
    let b = a.clone();
    assert_eq!(a, b);

    let mut set = HashSet::new();
    set.insert(a);
    assert!(set.contains(&b));

    let s = Secret("hunter2".to_string());
    assert_eq!(format!("{:?}", s), "Secret(..)"); // 使用手写 Debug

    assert_ne!(Currency::Brl, Currency::Usd);
}
