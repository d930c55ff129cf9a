//! The fixed event category table.

/// Display metadata for one event category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

/// The eight built-in categories, in display order.
pub const CATEGORIES: [Category; 8] = [
    Category {
        id: "work",
        name: "Work",
        icon: "💼",
        color: "#FF6B6B",
    },
    Category {
        id: "life",
        name: "Life",
        icon: "🏠",
        color: "#4ECDC4",
    },
    Category {
        id: "study",
        name: "Study",
        icon: "📚",
        color: "#45B7D1",
    },
    Category {
        id: "entertainment",
        name: "Entertainment",
        icon: "🎮",
        color: "#96CEB4",
    },
    Category {
        id: "health",
        name: "Health",
        icon: "💪",
        color: "#FECA57",
    },
    Category {
        id: "social",
        name: "Social",
        icon: "👥",
        color: "#FF9FF3",
    },
    Category {
        id: "travel",
        name: "Travel",
        icon: "✈️",
        color: "#54A0FF",
    },
    Category {
        id: "other",
        name: "Other",
        icon: "📝",
        color: "#5F27CD",
    },
];

/// Category id applied when a request omits or misspells one.
pub const DEFAULT_CATEGORY: &str = "other";

/// Looks up a category by id.
pub fn find_category(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == id)
}

/// Returns `id` when it names a known category, the default otherwise.
pub fn normalize_category(id: &str) -> &str {
    if find_category(id).is_some() {
        id
    } else {
        DEFAULT_CATEGORY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_category() {
        let work = find_category("work").unwrap();
        assert_eq!(work.icon, "💼");
        assert_eq!(work.color, "#FF6B6B");

        assert!(find_category("nope").is_none());
    }

    #[test]
    fn test_normalize_category_keeps_known() {
        assert_eq!(normalize_category("travel"), "travel");
    }

    #[test]
    fn test_normalize_category_defaults_unknown() {
        assert_eq!(normalize_category("sleeping"), "other");
        assert_eq!(normalize_category(""), "other");
    }

    #[test]
    fn test_all_categories_have_distinct_ids() {
        for (i, a) in CATEGORIES.iter().enumerate() {
            for b in &CATEGORIES[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
