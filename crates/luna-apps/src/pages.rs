//! Static portfolio pages
//!
//! Pages are plain data; the host lays them out with the desktop theme.

use serde::Serialize;

/// A piece of page content
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Block {
    Heading { text: &'static str },
    Paragraph { text: &'static str },
    List { items: &'static [&'static str] },
    /// Titled group of items (e.g., a skill category)
    Group {
        title: &'static str,
        items: &'static [&'static str],
    },
    /// Project card with a technology line and an optional link
    Card {
        title: &'static str,
        text: &'static str,
        tech: &'static str,
        link: Option<&'static str>,
    },
    /// Labelled link (mail, web)
    Link {
        label: &'static str,
        text: &'static str,
        href: &'static str,
    },
}

/// A static page shown in a window
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Page {
    pub id: &'static str,
    pub title: &'static str,
    pub blocks: &'static [Block],
}

pub const MY_COMPUTER: Page = Page {
    id: "my-computer",
    title: "System Information",
    blocks: &[Block::List {
        items: &[
            "OS: Windows XP Themed Portfolio",
            "CPU: Rust + WebAssembly",
            "Memory: wasm-bindgen",
            "Storage: Crates, Traits, and CSS",
        ],
    }],
};

pub const RECYCLE_BIN: Page = Page {
    id: "recycle-bin",
    title: "Recycle Bin",
    blocks: &[Block::Paragraph {
        text: "No items to display.",
    }],
};

pub const SKILLS: Page = Page {
    id: "skills",
    title: "Technical Skills",
    blocks: &[
        Block::Group {
            title: "Programming & Scripting",
            items: &["Rust", "Python", "Shell / Bash", "HTML / CSS"],
        },
        Block::Group {
            title: "Security Tools",
            items: &["Wireshark", "Nmap", "Burp Suite"],
        },
        Block::Group {
            title: "Networking",
            items: &["Packet Tracer", "Network Configuration"],
        },
        Block::Group {
            title: "Databases",
            items: &["SQL", "PL/SQL"],
        },
    ],
};

pub const PROJECTS: Page = Page {
    id: "projects",
    title: "Projects",
    blocks: &[
        Block::Card {
            title: "Emotion Detection AI",
            text: "Real-time facial emotion analysis with OpenCV and pre-trained models.",
            tech: "Python • OpenCV • ML",
            link: Some("https://github.com/"),
        },
        Block::Card {
            title: "To-do List",
            text: "A small task manager web app built to practise front-end fundamentals.",
            tech: "HTML • CSS • JavaScript • LocalStorage",
            link: Some("https://github.com/"),
        },
    ],
};

pub const CERTIFICATIONS: Page = Page {
    id: "certifications",
    title: "Certifications",
    blocks: &[Block::List {
        items: &[
            "DP-900",
            "IBM Cyber Security",
            "(CEH) SQL Injection Attack",
            "ISC2 - CC",
        ],
    }],
};

pub const ABOUT: Page = Page {
    id: "about",
    title: "About Me",
    blocks: &[
        Block::Paragraph {
            text: "Graduate specializing in cybersecurity, with hands-on exposure to log analysis, \
                   web development, and threat identification.",
        },
        Block::Heading { text: "Education" },
        Block::List {
            items: &["BCA (Cybersecurity), 2022-2025"],
        },
        Block::Heading { text: "Internships" },
        Block::List {
            items: &[
                "Virtual job simulation: analyzed web activity logs during a breach scenario.",
                "Front-end internship: built a responsive web app that consumed public APIs.",
            ],
        },
        Block::Heading {
            text: "Achievements & Interests",
        },
        Block::List {
            items: &[
                "Class representative; merit-based academic scholarship.",
                "Interests: Capture The Flag (CTF), system hardening.",
            ],
        },
    ],
};

pub const CONTACT: Page = Page {
    id: "contact",
    title: "Contact",
    blocks: &[
        Block::Link {
            label: "Email",
            text: "hello@example.com",
            href: "mailto:hello@example.com",
        },
        Block::Link {
            label: "LinkedIn",
            text: "linkedin.com",
            href: "https://linkedin.com/",
        },
        Block::Link {
            label: "GitHub",
            text: "github.com",
            href: "https://github.com/",
        },
    ],
};

/// Every static page
pub const PAGES: &[Page] = &[
    MY_COMPUTER,
    RECYCLE_BIN,
    SKILLS,
    PROJECTS,
    CERTIFICATIONS,
    ABOUT,
    CONTACT,
];

/// Look up a static page by content id
pub fn find(id: &str) -> Option<&'static Page> {
    PAGES.iter().find(|page| page.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find() {
        assert_eq!(find("skills").map(|p| p.title), Some("Technical Skills"));
        assert!(find("game").is_none());
    }

    #[test]
    fn test_page_ids_unique() {
        for (i, page) in PAGES.iter().enumerate() {
            assert!(PAGES[i + 1..].iter().all(|other| other.id != page.id), "{}", page.id);
        }
    }

    #[test]
    fn test_block_json_is_tagged() {
        let json = serde_json::to_string(&RECYCLE_BIN.blocks[0]).unwrap();
        assert_eq!(json, r#"{"kind":"paragraph","text":"No items to display."}"#);
    }
}
