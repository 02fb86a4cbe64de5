//! Kind discriminators of the wire format.
//!
//! Every object the API returns is wrapped in an envelope whose `kind` field
//! names the shape of its `data` payload. Only six kinds are decoded into
//! typed records; the rest are recognized so they can be named in logs and
//! skipped.

use std::fmt;

/// Kind discriminators used by the upstream API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `t1`: a comment
    Comment,
    /// `t2`: a user account
    Account,
    /// `t3`: a submitted post
    Post,
    /// `t4`: a private message
    Message,
    /// `t5`: a subreddit
    Subreddit,
    /// `t6`: an award
    Award,
    /// `Listing`: a page of things
    Listing,
    /// `KarmaList`: karma breakdown per subreddit
    KarmaList,
    /// `TrophyList`: trophies of a user
    TrophyList,
    /// `UserList`: a list of users
    UserList,
    /// `more`: placeholder for comments left out of a tree
    More,
    /// `modaction`: an entry of the moderation log
    ModAction,
}

impl Kind {
    /// All known kinds, in table order.
    pub const ALL: [Kind; 12] = [
        Kind::Comment,
        Kind::Account,
        Kind::Post,
        Kind::Message,
        Kind::Subreddit,
        Kind::Award,
        Kind::Listing,
        Kind::KarmaList,
        Kind::TrophyList,
        Kind::UserList,
        Kind::More,
        Kind::ModAction,
    ];

    /// The exact discriminator string used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Comment => "t1",
            Kind::Account => "t2",
            Kind::Post => "t3",
            Kind::Message => "t4",
            Kind::Subreddit => "t5",
            Kind::Award => "t6",
            Kind::Listing => "Listing",
            Kind::KarmaList => "KarmaList",
            Kind::TrophyList => "TrophyList",
            Kind::UserList => "UserList",
            Kind::More => "more",
            Kind::ModAction => "modaction",
        }
    }

    /// Look up a discriminator string. Matching is exact and case-sensitive.
    pub fn parse(discriminator: &str) -> Option<Kind> {
        Kind::ALL.into_iter().find(|k| k.as_str() == discriminator)
    }

    /// Whether envelopes of this kind are decoded into a typed record.
    pub fn is_classified(&self) -> bool {
        matches!(
            self,
            Kind::Comment
                | Kind::Account
                | Kind::Post
                | Kind::Subreddit
                | Kind::More
                | Kind::ModAction
        )
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
