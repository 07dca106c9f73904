//! Site-wide constants

pub const SITE_NAME: &str = "Kyle Tran";

/// Landing page navigation entries as (label, route) pairs.
pub const NAV_LINKS: &[(&str, &str)] = &[("Projects", "/projects"), ("Contact", "/contact")];

/// External link behind the landing page tagline.
pub const DISCORD_INVITE: &str = "https://discord.com/invite/XHUyAQb3";

/// A social destination rendered as a card on the contact page.
pub struct SocialLink {
    pub label: &'static str,
    pub handle: &'static str,
    pub href: &'static str,
}

pub const SOCIALS: &[SocialLink] = &[
    SocialLink {
        label: "LinkedIn",
        handle: "Profile",
        href: "https://www.linkedin.com/in/kyletran01/",
    },
    SocialLink {
        label: "Github",
        handle: "Kyle Tran",
        href: "https://github.com/kylettran",
    },
    SocialLink {
        label: "X",
        handle: "@kyle_trxn",
        href: "https://twitter.com/kylettran",
    },
];
