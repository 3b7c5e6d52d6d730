use chrono::NaiveDate;

use crate::content::{Catalog, CatalogError, ContentItem};
use crate::facets::{FacetCatalog, FacetCatalogError};

const AUTHOR: &str = "Bhanu Teja";

pub fn blog_facets() -> Result<FacetCatalog, FacetCatalogError> {
    FacetCatalog::new(
        "All Posts",
        [
            ("tutorial", "Tutorials"),
            ("personal", "Personal"),
            ("insights", "Insights"),
        ],
    )
}

pub fn blog_posts() -> Vec<ContentItem> {
    vec![
        ContentItem::new(
            1u64,
            "Getting Started with Computer Vision: A Beginner's Guide",
            "Explore the fundamentals of computer vision and learn how to build your first OpenCV project. This comprehensive guide covers everything from basic image processing to advanced techniques.",
            "tutorial",
        )
        .with_tags(["Computer Vision", "OpenCV", "Python", "AI"])
        .with_featured(true)
        .with_published_at(NaiveDate::from_ymd_opt(2024, 12, 15))
        .with_author(AUTHOR)
        .with_read_time("8 min read"),
        ContentItem::new(
            2u64,
            "My Journey with AI: From Novice to Building Recognition Systems",
            "A personal reflection on my journey into artificial intelligence, the challenges I faced, and the projects that shaped my understanding of ML and computer vision.",
            "personal",
        )
        .with_tags(["AI", "Machine Learning", "Personal", "Journey"])
        .with_published_at(NaiveDate::from_ymd_opt(2024, 12, 10))
        .with_author(AUTHOR)
        .with_read_time("6 min read"),
        ContentItem::new(
            3u64,
            "Building Scalable Web Applications with React and Node.js",
            "Learn best practices for developing full-stack applications that can handle growth. We'll cover architecture patterns, performance optimization, and deployment strategies.",
            "tutorial",
        )
        .with_tags(["React", "Node.js", "Full Stack", "Scalability"])
        .with_featured(true)
        .with_published_at(NaiveDate::from_ymd_opt(2024, 12, 5))
        .with_author(AUTHOR)
        .with_read_time("10 min read"),
        ContentItem::new(
            4u64,
            "The Future of AI in Education: Opportunities and Challenges",
            "An analysis of how artificial intelligence is transforming education, the potential benefits, and the challenges we need to address for successful implementation.",
            "insights",
        )
        .with_tags(["AI", "Education", "Future", "Technology"])
        .with_published_at(NaiveDate::from_ymd_opt(2024, 11, 28))
        .with_author(AUTHOR)
        .with_read_time("7 min read"),
        ContentItem::new(
            5u64,
            "Gesture Recognition: Building Intuitive Human-Computer Interactions",
            "Dive deep into the world of gesture recognition technology. Learn how to create applications that respond to human gestures using MediaPipe and computer vision.",
            "tutorial",
        )
        .with_tags(["Gesture Recognition", "MediaPipe", "HCI", "Computer Vision"])
        .with_published_at(NaiveDate::from_ymd_opt(2024, 11, 20))
        .with_author(AUTHOR)
        .with_read_time("9 min read"),
        ContentItem::new(
            6u64,
            "Reflections on My First Hackathon Experience",
            "Sharing my experience participating in hackathons, the lessons learned, and how these events have shaped my approach to problem-solving and innovation.",
            "personal",
        )
        .with_tags(["Hackathon", "Experience", "Innovation", "Problem Solving"])
        .with_published_at(NaiveDate::from_ymd_opt(2024, 11, 15))
        .with_author(AUTHOR)
        .with_read_time("5 min read"),
    ]
}

pub fn blog_catalog() -> Result<Catalog, CatalogError> {
    Catalog::new(blog_facets()?, blog_posts())
}
