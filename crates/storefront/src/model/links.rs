use serde::Serialize;

/// An outbound footer link. Targets are opaque and passed through unmodified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub label: &'static str,
    pub link: &'static str,
}

/// Footer links in display order.
pub const SOCIAL_LINKS: [SocialLink; 5] = [
    SocialLink {
        label: "Contact Us",
        link: "tel:+918235510844",
    },
    SocialLink {
        label: "Instagram",
        link: "#",
    },
    SocialLink {
        label: "Whatsapp",
        link: "#",
    },
    SocialLink {
        label: "X / Twitter",
        link: "#",
    },
    SocialLink {
        label: "Email Us",
        link: "mailto:hello@popcornculture.com",
    },
];
