//! Wire-level decoding tests for listings, envelopes and post pages.
//!
//! These tests feed JSON bodies through the public API the way a request
//! layer would, using the fixture builders.

use listing_rs::fixtures::{self, ListingFixture};
use listing_rs::{
    Anchor, CommentTree, Decoder, Envelope, Error, Kind, Listing, PostAndComments, Response,
    Thing, Things,
};
use serde_json::{json, Value};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn valid_payloads() -> Vec<(Kind, Value)> {
    vec![
        (Kind::Comment, json!({ "name": "t1_a", "body": "hi", "likes": null })),
        (Kind::More, json!({ "name": "t1_m", "children": ["t1_b"] })),
        (Kind::Account, json!({ "name": "alice", "link_karma": 10 })),
        (Kind::Post, json!({ "name": "t3_p", "title": "Hello", "created_utc": 1700000000.5 })),
        (Kind::Subreddit, json!({ "display_name": "rust", "user_is_banned": null })),
        (Kind::ModAction, json!({ "action": "removecomment", "mod": "bob" })),
    ]
}

fn bucket_sizes(things: &Things) -> [usize; 6] {
    [
        things.comments.len(),
        things.mores.len(),
        things.accounts.len(),
        things.posts.len(),
        things.subreddits.len(),
        things.mod_actions.len(),
    ]
}

/// Post page example: one post, one top-level comment, one placeholder
#[test]
fn test_post_page_end_to_end() {
    init_tracing();

    let body = json!([
        { "kind": "Listing", "data": { "children": [
            { "kind": "t3", "data": { "id": "abc", "name": "t3_abc" } },
        ] } },
        { "kind": "Listing", "data": { "children": [
            { "kind": "t1", "data": { "id": "1", "name": "t1_1", "parent_id": "t3_abc" } },
            { "kind": "more", "data": { "name": "more_1", "parent_id": "t3_abc", "children": ["t1_2", "t1_3"] } },
        ] } },
    ]);

    let pc: PostAndComments = serde_json::from_value(body.clone()).unwrap();
    assert_eq!(pc.post.id, "abc");
    assert_eq!(pc.comments.len(), 1);
    assert_eq!(pc.comments[0].id, "1");
    let more = pc.more.as_ref().unwrap();
    assert_eq!(more.children, vec!["t1_2", "t1_3"]);
    assert!(pc.has_more());

    // Same body through the sans-io decoder
    let responses = fixtures::decode_in_chunks(body.to_string().as_bytes(), 16).unwrap();
    assert_eq!(responses, vec![Response::PostAndComments(Box::new(pc))]);
}

/// Each supported kind lands in exactly its own bucket
#[test]
fn test_classifier_one_record_per_kind() {
    init_tracing();

    for (index, (kind, payload)) in valid_payloads().into_iter().enumerate() {
        let things = Things::classify(vec![Envelope::new(kind.as_str(), payload)]);

        let mut expected = [0; 6];
        expected[index] = 1;
        assert_eq!(bucket_sizes(&things), expected, "kind {kind}");
    }
}

/// Unsupported kinds and bad payloads leave the buckets untouched
#[test]
fn test_classifier_skips_unsupported_and_malformed() {
    init_tracing();

    let unsupported = [
        "t4", "t6", "Listing", "KarmaList", "TrophyList", "UserList", "", "x9",
    ];
    let mut envelopes: Vec<Envelope> = unsupported
        .iter()
        .map(|kind| Envelope::new(*kind, json!({ "name": "t1_a" })))
        .collect();

    envelopes.extend([
        Envelope::new("t1", json!({ "score": "many" })),
        Envelope::new("more", json!({ "children": "t1_a" })),
        Envelope::new("t2", json!({ "link_karma": -1.5 })),
        Envelope::new("t3", json!({ "title": 7 })),
        Envelope::new("t5", json!("rust")),
        Envelope::new("modaction", json!({ "action": {} })),
        Envelope::new("t1", Value::Null),
    ]);

    let things = Things::classify(envelopes);
    assert!(things.is_empty(), "expected no records, got {things:?}");
}

/// Null numbers and flags decode as zero values instead of dropping the record
#[test]
fn test_classifier_keeps_null_scalars() {
    init_tracing();

    let things = Things::classify(vec![
        Envelope::new("t5", json!({ "display_name": "rust", "subscribers": null })),
        Envelope::new("t3", json!({ "name": "t3_p", "spoiler": null, "score": null })),
        Envelope::new("t1", json!({ "name": "t1_a", "score": null, "saved": null })),
    ]);

    assert_eq!(bucket_sizes(&things), [1, 0, 0, 1, 1, 0]);
    assert_eq!(things.subreddits[0].subscribers, 0);
    assert!(!things.posts[0].spoiler);
    assert_eq!(things.comments[0].score, 0);
}

/// Arrays are never read as listings, even when they look like one
#[test]
fn test_array_shapes_are_not_listings() {
    let children = json!([{ "kind": "t1", "data": { "name": "t1_a" } }]);
    assert!(serde_json::from_value::<Listing>(json!([{ "children": children }])).is_err());

    // A comment encoded with one reply writes the reply as a bare array
    let encoded = json!({ "name": "t1_a", "replies": [{ "name": "t1_b" }] });
    let listing = ListingFixture::new().child(fixtures::raw("t1", encoded)).to_value();
    let things: Things = serde_json::from_value(listing["data"]["children"].clone()).unwrap();
    assert!(things.is_empty());
}

/// Unsupported kinds survive single-envelope decoding with their payload
#[test]
fn test_single_envelope_unsupported_kind() {
    let envelope: Envelope =
        serde_json::from_value(json!({ "kind": "t6", "data": { "id": "x" } })).unwrap();
    match envelope.decode().unwrap() {
        Thing::Unsupported { kind, data } => {
            assert_eq!(kind, "t6");
            assert_eq!(data, json!({ "id": "x" }));
        }
        other => panic!("Expected Unsupported thing, got {other:?}"),
    }
}

/// Paginated listing with anchors and mixed children
#[test]
fn test_listing_pagination_and_mixed_children() {
    let body = ListingFixture::new()
        .post("t3_a")
        .child(fixtures::raw("t4", json!({ "subject": "pm" })))
        .post("t3_b")
        .child(fixtures::raw("t3", json!({ "num_comments": "lots" })))
        .after("t3_b")
        .to_bytes();

    let listing: Listing = serde_json::from_slice(&body).unwrap();
    let ids: Vec<&str> = listing.things.posts.iter().map(|p| p.full_id.as_str()).collect();
    assert_eq!(ids, vec!["t3_a", "t3_b"]);
    assert_eq!(listing.after(), "t3_b");
    assert!(!listing.has_before());
}

/// Structural errors fail the whole document
#[test]
fn test_structural_errors() {
    let one_listing = json!([ListingFixture::new().post("t3_a").to_value()]);
    assert!(serde_json::from_value::<PostAndComments>(one_listing).is_err());

    let no_post = fixtures::post_and_comments(
        &ListingFixture::new(),
        &ListingFixture::new().comment("t1_a", "t3_a"),
    );
    assert_eq!(Response::from_value(no_post).unwrap_err(), Error::MissingPost);

    let children_not_array = json!({ "kind": "Listing", "data": { "children": "none" } });
    assert!(matches!(
        Response::from_value(children_not_array),
        Err(Error::Decode(_))
    ));
}

/// A sans-io decoder splits a stream of bodies into responses
#[test]
fn test_decoder_stream() {
    let mut decoder = Decoder::new();
    let page = ListingFixture::new().comment("t1_a", "t3_p").after("t1_a").to_bytes();
    let more = fixtures::more_children(vec![fixtures::comment("t1_b", "t1_a")]).to_string();

    decoder.feed_bytes(&page[..10]);
    assert!(decoder.decode::<Listing>().unwrap().is_none());
    decoder.feed_bytes(&page[10..]);
    decoder.feed_bytes(more.as_bytes());

    let listing = decoder.decode::<Listing>().unwrap().unwrap();
    assert!(listing.has_after());

    match decoder.decode_response().unwrap() {
        Some(Response::MoreChildren(things)) => assert_eq!(things.comments[0].full_id, "t1_b"),
        other => panic!("Expected MoreChildren response, got {other:?}"),
    }
    assert!(decoder.is_empty());
}

/// Encoding a listing and decoding it again keeps every typed record
#[test]
fn test_listing_encode_round_trip() {
    let listing: Listing = serde_json::from_value(
        ListingFixture::new()
            .comment("t1_a", "t3_p")
            .more("t1_m", "t3_p", &["t1_b", "t1_c"])
            .post("t3_p")
            .before("t3_o")
            .to_value(),
    )
    .unwrap();

    let encoded = serde_json::to_vec(&listing).unwrap();
    let decoded: Listing = serde_json::from_slice(&encoded).unwrap();
    assert_eq!(decoded, listing);
}
