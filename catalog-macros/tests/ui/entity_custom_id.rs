use catalog_domain::entity::{Entity, same_entity};
use catalog_domain::value_object::UniqueId;
use catalog_macros::entity;

#[entity(id = UniqueId, name = "video", debug = false)]
struct Video {
    title: String,
}

impl std::fmt::Debug for Video {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Video({})", self.id)
    }
}

#[entity(name = "video")]
struct LegacyVideo {
    pub id: UniqueId,
    title: String,
}

fn main() {
    let id = UniqueId::parse("123e4567-e89b-12d3-a456-426614174000").unwrap();
    let video = Video {
        id: id.clone(),
        title: "Intro".to_string(),
    };
    let legacy = LegacyVideo {
        title: "Intro (old)".to_string(),
        id,
    };

    assert_eq!(Video::TYPE, "video");
    assert!(same_entity(&video, &legacy));
    assert_eq!(
        format!("{:?}", video),
        "Video(123e4567-e89b-12d3-a456-426614174000)"
    );
    assert_ne!(video.title, legacy.title);
}
