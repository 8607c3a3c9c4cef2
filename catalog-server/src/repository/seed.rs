//! Example Dataset
//!
//! Hard-coded catalog used by the mock backend until a real database exists.

use chrono::{Duration, TimeZone, Utc};

use super::db::CatalogDb;
use crate::domain::{slugify, ColoringPage, Difficulty, ParentEntity, ParentKind};

const PAGES: &[(&str, Difficulty, &str, &str, &str)] = &[
    ("Happy Dragon", Difficulty::Easy, "fantasy", "4-8", "cartoon"),
    ("Sleeping Unicorn", Difficulty::Easy, "fantasy", "4-8", "cartoon"),
    ("Castle on the Hill", Difficulty::Medium, "fantasy", "8-12", "line-art"),
    ("Friendly Shark", Difficulty::Easy, "ocean", "4-8", "cartoon"),
    ("Coral Reef", Difficulty::Hard, "ocean", "12+", "detailed"),
    ("Sea Turtle Family", Difficulty::Medium, "ocean", "8-12", "cartoon"),
    ("Rocket Launch", Difficulty::Easy, "space", "4-8", "cartoon"),
    ("Astronaut Cat", Difficulty::Medium, "space", "8-12", "cartoon"),
    ("Galaxy Mandala", Difficulty::Hard, "space", "12+", "mandala"),
    ("T-Rex Roar", Difficulty::Easy, "dinosaurs", "4-8", "cartoon"),
    ("Stegosaurus Walk", Difficulty::Medium, "dinosaurs", "8-12", "line-art"),
    ("Fossil Dig", Difficulty::Hard, "dinosaurs", "12+", "detailed"),
    ("Pumpkin Patch", Difficulty::Easy, "seasons", "4-8", "cartoon"),
    ("Snowman Party", Difficulty::Easy, "seasons", "4-8", "cartoon"),
    ("Spring Garden", Difficulty::Medium, "seasons", "8-12", "line-art"),
    ("Autumn Leaves Mandala", Difficulty::Hard, "seasons", "12+", "mandala"),
    ("Farm Tractor", Difficulty::Easy, "vehicles", "4-8", "cartoon"),
    ("Fire Truck", Difficulty::Easy, "vehicles", "4-8", "cartoon"),
    ("Steam Train", Difficulty::Medium, "vehicles", "8-12", "line-art"),
    ("Jungle Lion", Difficulty::Medium, "animals", "8-12", "cartoon"),
    ("Panda Picnic", Difficulty::Easy, "animals", "4-8", "cartoon"),
    ("Owl at Night", Difficulty::Hard, "animals", "12+", "detailed"),
    ("Butterfly Mandala", Difficulty::Hard, "animals", "12+", "mandala"),
    ("Puppy and Ball", Difficulty::Easy, "animals", "4-8", "cartoon"),
];

/// Fill an empty store with the example catalog and its relations
pub fn populate(db: &mut CatalogDb) {
    let epoch = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).single().unwrap_or_else(Utc::now);

    for (index, (title, difficulty, theme, age_range, style)) in PAGES.iter().enumerate() {
        let id = index as u32 + 1;
        let slug = slugify(title);
        db.insert_page(ColoringPage {
            id,
            title: title.to_string(),
            description: Some(format!("Printable {} coloring page", title.to_lowercase())),
            difficulty: *difficulty,
            age_range: age_range.to_string(),
            theme: theme.to_string(),
            style: style.to_string(),
            thumbnail: Some(format!("/images/coloring-pages/{}-thumb.png", slug)),
            slug,
            created_at: epoch + Duration::days(index as i64),
        });
    }

    let parents = [
        (ParentEntity::new(1, ParentKind::Category, "fantasy").with_display_name("Fantasy"), vec![1, 2, 3]),
        (ParentEntity::new(2, ParentKind::Category, "ocean").with_display_name("Under the Sea"), vec![4, 5, 6]),
        (ParentEntity::new(3, ParentKind::Category, "space").with_display_name("Outer Space"), vec![7, 8, 9]),
        (ParentEntity::new(4, ParentKind::Category, "animals").with_display_name("Animals"), vec![20, 21, 22, 23, 24]),
        (ParentEntity::new(1, ParentKind::Collection, "mandalas").with_display_name("Mandala Madness"), vec![9, 16, 23]),
        (ParentEntity::new(2, ParentKind::Collection, "holidays").with_display_name("Holiday Fun"), vec![13, 14]),
        (ParentEntity::new(1, ParentKind::Book, "first-coloring-book").with_display_name("My First Coloring Book"), vec![1, 4, 7, 10, 17, 21, 24]),
        (ParentEntity::new(2, ParentKind::Book, "big-kids-book").with_display_name("Big Kids Coloring Book"), vec![5, 12, 22]),
    ];

    for (parent, related) in parents {
        db.relations.insert((parent.parent_type, parent.id), related);
        db.insert_parent(parent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_relations_point_at_real_pages() {
        let mut db = CatalogDb::new();
        populate(&mut db);

        assert_eq!(db.pages.len(), PAGES.len());
        for ((kind, id), related) in &db.relations {
            assert!(db.has_parent(*kind, *id));
            assert!(related.iter().all(|page_id| db.pages.contains_key(page_id)));
        }
        assert_eq!(db.allocate_page_id(), PAGES.len() as u32 + 1);
    }

    #[test]
    fn test_seed_slugs_are_unique() {
        let mut db = CatalogDb::new();
        populate(&mut db);
        let mut slugs: Vec<_> = db.pages.values().map(|p| p.slug.clone()).collect();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), PAGES.len());
    }
}
