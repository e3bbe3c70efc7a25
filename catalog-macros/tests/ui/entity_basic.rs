use catalog_domain::entity::Entity;
use catalog_domain::value_object::UniqueId;
use catalog_macros::entity;

#[entity]
#[derive(PartialEq)]
struct CastMember {
    name: String,
    kind: u8,
}

fn main() {
    let id = UniqueId::new();
    let a = CastMember {
        id: id.clone(),
        name: "Alice".to_string(),
        kind: 1,
    };
    let b = CastMember {
        id,
        name: "Bob".to_string(),
        kind: 2,
    };

    // 用户派生的 PartialEq 被替换为按标识判等
    assert_eq!(a, b);
    assert_eq!(CastMember::TYPE, "cast_member");
    assert_eq!(a.id(), b.id());
    let _ = format!("{:?}", a.clone());
    assert_ne!(a.name, b.name);
    assert_ne!(a.kind, b.kind);
}
