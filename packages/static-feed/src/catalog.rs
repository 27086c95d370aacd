use std::collections::HashMap;

/// A read-only text post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticPost {
    pub id: i32,
    pub title: &'static str,
    pub content: &'static str,
}

const SEED: &[(i32, &str, &str)] = &[
    (1, "New Post", "Cool post"),
    (
        2,
        "Django Ninja 101",
        "FastAPI-like documentation for your Django projects.",
    ),
    (
        3,
        "Python Performance",
        "Comparing speed differences between Pydantic v1 and v2.",
    ),
    (
        4,
        "The Art of Async",
        "How to handle background tasks effectively in modern web apps.",
    ),
    (
        5,
        "Travel Tips: Japan",
        "Essential phrases and hidden spots in Kyoto and Osaka.",
    ),
    (
        6,
        "Morning Routine",
        "Starting your day with focus: meditation, water, and movement.",
    ),
    (
        7,
        "React vs Vue in 2025",
        "Choosing the right frontend framework for your next MVP.",
    ),
    (
        8,
        "Homemade Sourdough",
        "A beginner's guide to maintaining a starter and baking bread.",
    ),
    (
        9,
        "Cybersecurity Basics",
        "Protecting your data with 2FA and password managers.",
    ),
    (
        10,
        "Minimalist Workspace",
        "Setting up a desk that inspires productivity and calm.",
    ),
    (
        11,
        "Understanding GPT-5",
        "A deep dive into the latest advancements in large language models.",
    ),
    (
        12,
        "Running Your First 5K",
        "A 12-week training plan for absolute beginners.",
    ),
    (
        13,
        "Dark Mode Best Practices",
        "Designing UI that is accessible and easy on the eyes.",
    ),
    (
        14,
        "The Future of Remote Work",
        "Why hybrid models are winning in the tech industry.",
    ),
    (
        15,
        "Garden to Table",
        "Growing your own herbs: basil, rosemary, and mint guide.",
    ),
    (
        16,
        "Building a Portfolio",
        "How to showcase your coding projects to get hired.",
    ),
    (
        17,
        "Financial Literacy",
        "Understanding the power of compound interest and ETFs.",
    ),
    (
        18,
        "Space Exploration",
        "The latest updates on the Mars settlement mission missions.",
    ),
    (
        19,
        "Mindful Coding",
        "Techniques for preventing burnout in high-stress dev roles.",
    ),
    (
        20,
        "Tailwind CSS Tips",
        "Writing cleaner utility classes using @apply and theme extensions.",
    ),
];

/// Immutable post table, built once at startup.
///
/// Posts keep their insertion order for listing; lookups by id go through a
/// side index.
#[derive(Debug)]
pub struct PostCatalog {
    posts: Vec<StaticPost>,
    index: HashMap<i32, usize>,
}

impl PostCatalog {
    pub fn new(posts: Vec<StaticPost>) -> Self {
        let index = posts
            .iter()
            .enumerate()
            .map(|(pos, post)| (post.id, pos))
            .collect();
        Self { posts, index }
    }

    /// The twenty built-in posts.
    pub fn seeded() -> Self {
        Self::new(
            SEED.iter()
                .map(|&(id, title, content)| StaticPost { id, title, content })
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn get(&self, id: i32) -> Option<&StaticPost> {
        self.index.get(&id).map(|&pos| &self.posts[pos])
    }

    /// Every post, in insertion order.
    pub fn all(&self) -> &[StaticPost] {
        &self.posts
    }

    /// The first `limit` posts. A non-positive limit means "no limit".
    pub fn take(&self, limit: i64) -> &[StaticPost] {
        if limit <= 0 {
            return &self.posts;
        }
        let n = usize::try_from(limit).map_or(self.posts.len(), |l| l.min(self.posts.len()));
        &self.posts[..n]
    }
}
