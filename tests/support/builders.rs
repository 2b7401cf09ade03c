// tests/support/builders.rs
use super::mocks::InMemoryDb;
use chrono::{DateTime, Duration, TimeZone, Utc};

pub const ARTICLE_COUNT: u64 = 13;
pub const MITCH_ARTICLE_COUNT: u64 = 12;
pub const ARTICLE_ONE_COMMENT_COUNT: u64 = 11;
pub const COMMENTLESS_ARTICLE_ID: i32 = 2;

const ARTICLES: [(&str, &str, &str, i32); 13] = [
    ("Living in the shadow of a great man", "mitch", "butter_bridge", 100),
    ("Sony Vaio; or, The Laptop", "mitch", "icellusedkars", 0),
    ("Eight pug gifs that remind me of mitch", "mitch", "icellusedkars", 0),
    ("Student SUES Mitch!", "mitch", "rogersop", 3),
    ("UNCOVERED: catspiracy to bring down democracy", "cats", "rogersop", 0),
    ("A", "mitch", "icellusedkars", 0),
    ("Z", "mitch", "icellusedkars", 0),
    ("Does Mitch predate civilisation?", "mitch", "icellusedkars", 0),
    ("They're not exactly dogs, are they?", "mitch", "butter_bridge", 1),
    ("Seven inspirational thought leaders from Manchester UK", "mitch", "rogersop", 0),
    ("Am I a cat?", "mitch", "icellusedkars", 0),
    ("Moustache", "mitch", "butter_bridge", 0),
    ("Another article about Mitch", "mitch", "butter_bridge", 0),
];

/// (article_id, author) for every seeded comment.
const COMMENTS: [(i32, &str); 18] = [
    (9, "butter_bridge"),
    (1, "butter_bridge"),
    (1, "icellusedkars"),
    (1, "icellusedkars"),
    (1, "icellusedkars"),
    (1, "icellusedkars"),
    (1, "icellusedkars"),
    (1, "icellusedkars"),
    (1, "icellusedkars"),
    (3, "icellusedkars"),
    (3, "icellusedkars"),
    (1, "butter_bridge"),
    (1, "icellusedkars"),
    (9, "icellusedkars"),
    (5, "icellusedkars"),
    (6, "butter_bridge"),
    (5, "butter_bridge"),
    (1, "icellusedkars"),
];

fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()
}

/// Seeds three topics (`paper` has no articles), four users (`lurker` has
/// written nothing), thirteen articles and eighteen comments. Creation times
/// are distinct and deliberately not in id order.
pub fn seeded_db() -> InMemoryDb {
    let db = InMemoryDb::new();

    db.add_topic("mitch", "The man, the Mitch, the legend");
    db.add_topic("cats", "Not dogs");
    db.add_topic("paper", "what books are made of");

    db.add_user("butter_bridge", "jonny");
    db.add_user("icellusedkars", "sam");
    db.add_user("rogersop", "paul");
    db.add_user("lurker", "do_nothing");

    for (index, (title, topic, author, votes)) in ARTICLES.into_iter().enumerate() {
        let n = index as i64 + 1;
        let created_at = epoch() + Duration::days((n * 7) % 13);
        db.add_article(title, topic, author, votes, created_at);
    }

    for (index, (article_id, author)) in COMMENTS.into_iter().enumerate() {
        let n = index as i64 + 1;
        let created_at = epoch() + Duration::hours((n * 5) % 18);
        db.add_comment(
            article_id,
            author,
            &format!("comment number {n}"),
            (n % 4) as i32,
            created_at,
        );
    }

    db
}
