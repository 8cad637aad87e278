//! Demo users and reports loaded into the in-memory store.

use super::{
    Comment, CommentAuthor, Feedback, FeedbackStatus, Location, Submitter, Urgency, User, UserRole,
};
use chrono::{DateTime, TimeZone, Utc};

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .expect("seed timestamps are valid")
}

fn admin_author() -> CommentAuthor {
    CommentAuthor {
        id: "admin1".to_string(),
        name: "Admin User".to_string(),
        role: UserRole::Admin,
    }
}

pub fn users() -> Vec<User> {
    vec![
        User {
            id: "user1".to_string(),
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            role: UserRole::Resident,
            phone: Some("555-123-4567".to_string()),
        },
        User {
            id: "user2".to_string(),
            name: "Jane Smith".to_string(),
            email: "jane@example.com".to_string(),
            role: UserRole::Resident,
            phone: None,
        },
        User {
            id: "admin1".to_string(),
            name: "Admin User".to_string(),
            email: "admin@citycouncil.gov".to_string(),
            role: UserRole::Admin,
            phone: Some("555-987-6543".to_string()),
        },
    ]
}

pub fn feedback() -> Vec<Feedback> {
    vec![
        Feedback {
            id: "feedback1".to_string(),
            title: "Pothole on Main Street".to_string(),
            description: "Large pothole causing damage to vehicles near 123 Main St intersection"
                .to_string(),
            created_at: at(2023, 3, 15, 10, 30),
            updated_at: at(2023, 3, 15, 14, 22),
            status: FeedbackStatus::InProgress,
            urgency: Urgency::Medium,
            issue_type: "Roads".to_string(),
            location: Location {
                address: "123 Main Street, Downtown".to_string(),
                latitude: Some(40.712776),
                longitude: Some(-74.005974),
            },
            images: vec!["/placeholder.svg".to_string()],
            submitted_by: Some(Submitter {
                name: Some("John Doe".to_string()),
                phone: Some("555-123-4567".to_string()),
                user_id: Some("user1".to_string()),
            }),
            assigned_to: Some("admin1".to_string()),
            comments: vec![Comment {
                id: "comment1".to_string(),
                content: "We have scheduled repairs for next week".to_string(),
                created_at: at(2023, 3, 15, 14, 22),
                author: admin_author(),
            }],
        },
        Feedback {
            id: "feedback2".to_string(),
            title: "Street Light Out".to_string(),
            description: "Street light has been out for 3 days at corner of Elm and 5th"
                .to_string(),
            created_at: at(2023, 3, 10, 18, 45),
            updated_at: at(2023, 3, 10, 18, 45),
            status: FeedbackStatus::Pending,
            urgency: Urgency::Low,
            issue_type: "Electricity".to_string(),
            location: Location {
                address: "Corner of Elm St and 5th Ave".to_string(),
                latitude: Some(40.730610),
                longitude: Some(-73.935242),
            },
            images: vec!["/placeholder.svg".to_string()],
            submitted_by: Some(Submitter {
                name: Some("Anonymous".to_string()),
                ..Default::default()
            }),
            assigned_to: None,
            comments: Vec::new(),
        },
        Feedback {
            id: "feedback3".to_string(),
            title: "Water main break".to_string(),
            description:
                "Water flowing onto street from broken main, creating hazardous conditions"
                    .to_string(),
            created_at: at(2023, 3, 14, 8, 15),
            updated_at: at(2023, 3, 14, 9, 30),
            status: FeedbackStatus::Resolved,
            urgency: Urgency::High,
            issue_type: "Water".to_string(),
            location: Location {
                address: "456 Park Avenue".to_string(),
                latitude: Some(40.7580),
                longitude: Some(-73.9855),
            },
            images: vec!["/placeholder.svg".to_string(), "/placeholder.svg".to_string()],
            submitted_by: Some(Submitter {
                name: Some("Jane Smith".to_string()),
                phone: None,
                user_id: Some("user2".to_string()),
            }),
            assigned_to: Some("admin1".to_string()),
            comments: vec![
                Comment {
                    id: "comment2".to_string(),
                    content: "Emergency crew dispatched".to_string(),
                    created_at: at(2023, 3, 14, 8, 30),
                    author: admin_author(),
                },
                Comment {
                    id: "comment3".to_string(),
                    content: "Issue has been resolved, road has been cleaned".to_string(),
                    created_at: at(2023, 3, 14, 9, 30),
                    author: admin_author(),
                },
            ],
        },
    ]
}
