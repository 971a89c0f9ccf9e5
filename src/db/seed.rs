// src/db/seed.rs
//
// Development/test fixture dataset
//
// Reviews and users are created externally in production; this module exists
// so local servers and the integration suite have a known catalog to work
// against. Loading is destructive: it replaces whatever rows exist.

use rusqlite::{params, Connection};

use crate::error::{AppError, AppResult};

/// Load the fixture dataset, replacing any existing rows.
///
/// The dataset: 4 categories, 4 users, 13 reviews (11 social deduction,
/// 1 euro game, 1 dexterity) and 6 comments (3 on review 2, 3 on review 3).
pub fn load_fixture_data(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        "DELETE FROM comments;
         DELETE FROM reviews;
         DELETE FROM users;
         DELETE FROM categories;",
    )
    .map_err(AppError::Database)?;

    insert_categories(conn)?;
    insert_users(conn)?;
    insert_reviews(conn)?;
    insert_comments(conn)?;

    Ok(())
}

fn insert_categories(conn: &Connection) -> AppResult<()> {
    let categories = [
        ("euro game", "Abstact games that involve little luck"),
        (
            "social deduction",
            "Players attempt to uncover each other's hidden role",
        ),
        ("dexterity", "Games involving physical skill"),
        ("children's games", "Games suitable for children"),
    ];

    for (slug, description) in categories {
        conn.execute(
            "INSERT INTO categories (slug, description) VALUES (?1, ?2)",
            params![slug, description],
        )?;
    }

    Ok(())
}

fn insert_users(conn: &Connection) -> AppResult<()> {
    let users = [
        (
            "mallionaire",
            "haz",
            "https://www.healthytherapies.com/wp-content/uploads/2016/06/Lime3.jpg",
        ),
        (
            "philippaclaire9",
            "philippa",
            "https://avatars2.githubusercontent.com/u/24604688?s=460&v=4",
        ),
        (
            "bainesface",
            "sarah",
            "https://avatars2.githubusercontent.com/u/24394918?s=400&v=4",
        ),
        (
            "dav3rid",
            "dave",
            "https://www.golenbock.com/wp-content/uploads/2015/01/placeholder-user.png",
        ),
    ];

    for (username, name, avatar_url) in users {
        conn.execute(
            "INSERT INTO users (username, name, avatar_url) VALUES (?1, ?2, ?3)",
            params![username, name, avatar_url],
        )?;
    }

    Ok(())
}

const PLACEHOLDER_IMG: &str =
    "https://www.golenbock.com/wp-content/uploads/2015/01/placeholder-user.png";

fn insert_reviews(conn: &Connection) -> AppResult<()> {
    // (review_id, title, designer, owner, body, category, created_at, votes)
    let reviews: [(i64, &str, &str, &str, &str, &str, &str, i64); 13] = [
        (
            1,
            "Agricola",
            "Uwe Rosenberg",
            "mallionaire",
            "Farmyard fun!",
            "euro game",
            "2021-01-18T10:00:20.514Z",
            1,
        ),
        (
            2,
            "Jenga",
            "Leslie Scott",
            "philippaclaire9",
            "Fiddly fun for all the family",
            "dexterity",
            "2021-01-18T10:01:41.251Z",
            5,
        ),
        (
            3,
            "Ultimate Werewolf",
            "Akihisa Okui",
            "bainesface",
            "We couldn't find the werewolf!",
            "social deduction",
            "2021-01-18T10:01:41.251Z",
            5,
        ),
        (
            4,
            "Dolor reprehenderit",
            "Gamey McGameface",
            "mallionaire",
            "Consequat velit occaecat voluptate do. Dolor pariatur fugiat sint et proident.",
            "social deduction",
            "2021-01-22T11:35:50.936Z",
            7,
        ),
        (
            5,
            "Proident tempor et.",
            "Seymour Buttz",
            "mallionaire",
            "Labore occaecat sunt qui commodo anim anim aliqua adipisicing aliquip fugiat.",
            "social deduction",
            "2021-01-07T09:06:08.077Z",
            5,
        ),
        (
            6,
            "Occaecat consequat officia in quis commodo.",
            "Ollie Tabooger",
            "mallionaire",
            "Fugiat fugiat enim officia laborum quis. Aliquip laboris non nulla nostrud magna.",
            "social deduction",
            "2020-09-13T14:19:28.077Z",
            8,
        ),
        (
            7,
            "Mollit elit qui incididunt veniam occaecat cupidatat",
            "Avery Wunzboogerz",
            "mallionaire",
            "Consectetur incididunt aliquip sunt officia. Magna ex nulla consectetur laboris.",
            "social deduction",
            "2021-01-25T11:16:54.963Z",
            9,
        ),
        (
            8,
            "One Night Ultimate Werewolf",
            "Akihisa Okui",
            "mallionaire",
            "We couldn't find the werewolf!",
            "social deduction",
            "2021-01-18T10:01:41.251Z",
            5,
        ),
        (
            9,
            "A truly Quacking Game; Quacks of Quedlinburg",
            "Wolfgang Warsch",
            "mallionaire",
            "Ever wish you could try your hand at mixing potions? A fine game.",
            "social deduction",
            "2021-01-18T10:01:41.251Z",
            10,
        ),
        (
            10,
            "Build you own tour de Yorkshire",
            "Asger Harding Granerud",
            "mallionaire",
            "Cold rain pours on the faces of your racers as you race through Yorkshire.",
            "social deduction",
            "2021-01-18T10:01:41.251Z",
            10,
        ),
        (
            11,
            "That's just what an evil person would say!",
            "Fiona Lohoar",
            "mallionaire",
            "If you've ever wanted to accuse your siblings of being part of a plot, this is the game for you.",
            "social deduction",
            "2021-01-18T10:01:41.251Z",
            8,
        ),
        (
            12,
            "Scythe; you're gonna need a bigger table!",
            "Jamey Stegmaier",
            "mallionaire",
            "Spend 30 minutes just setting up all of the boards before you start playing.",
            "social deduction",
            "2021-01-22T10:37:04.839Z",
            100,
        ),
        (
            13,
            "Settlers of Catan: Don't Settle For Less",
            "Klaus Teuber",
            "mallionaire",
            "You have stumbled across an uncharted island rich in natural resources.",
            "social deduction",
            "1970-01-10T02:08:38.400Z",
            16,
        ),
    ];

    for (review_id, title, designer, owner, body, category, created_at, votes) in reviews {
        conn.execute(
            "INSERT INTO reviews (review_id, title, designer, owner, review_img_url,
                                  review_body, category, created_at, votes)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                review_id,
                title,
                designer,
                owner,
                PLACEHOLDER_IMG,
                body,
                category,
                created_at,
                votes,
            ],
        )?;
    }

    Ok(())
}

fn insert_comments(conn: &Connection) -> AppResult<()> {
    // (comment_id, body, votes, author, review_id, created_at)
    let comments: [(i64, &str, i64, &str, i64, &str); 6] = [
        (
            1,
            "I loved this game too!",
            16,
            "bainesface",
            2,
            "2017-11-22T12:43:33.389Z",
        ),
        (
            2,
            "My dog loved this game too!",
            13,
            "mallionaire",
            3,
            "2021-01-18T10:09:05.410Z",
        ),
        (
            3,
            "I didn't know dogs could play games",
            10,
            "philippaclaire9",
            3,
            "2021-01-18T10:09:48.110Z",
        ),
        (
            4,
            "EPIC board game!",
            16,
            "bainesface",
            2,
            "2017-11-22T12:36:03.389Z",
        ),
        (
            5,
            "Now this is a story all about how, board games turned my life upside down",
            13,
            "mallionaire",
            2,
            "2021-01-18T10:24:05.410Z",
        ),
        (
            6,
            "Not sure about dogs, but my cat likes to get involved with board games, the boxes are their particular favourite",
            10,
            "philippaclaire9",
            3,
            "2021-01-13T12:26:32.157Z",
        ),
    ];

    for (comment_id, body, votes, author, review_id, created_at) in comments {
        conn.execute(
            "INSERT INTO comments (comment_id, body, votes, author, review_id, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![comment_id, body, votes, author, review_id, created_at],
        )?;
    }

    Ok(())
}
