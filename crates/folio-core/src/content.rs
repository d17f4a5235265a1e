use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AboutSection {
    pub id: u32,
    pub key: String,
    pub title: Option<String>,
    pub content: String,
    pub active: bool,
    pub sort_order: i32,
}

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("content source is not configured")]
    Unconfigured,
    #[error("content query failed: {0}")]
    Query(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectEntry {
    pub id: u32,
    pub title: String,
    pub summary: String,
    pub tags: Vec<String>,
    pub image: String,
    pub image_alt: Option<String>,
    pub link: Option<String>,
    pub active: bool,
    pub sort_order: i32,
}

impl ProjectEntry {
    #[inline]
    pub fn alt_text(&self) -> &str {
        self.image_alt.as_deref().unwrap_or(&self.title)
    }

    #[inline]
    pub fn href(&self) -> &str {
        self.link.as_deref().unwrap_or("#")
    }
}

/// One card of the experience timeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub id: u32,
    pub period: String,
    pub role: String,
    pub focus: Option<String>,
    pub desc: String,
    pub skills: Vec<String>,
    pub active: bool,
    pub sort_order: i32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Photo {
    pub id: u32,
    pub image_url: String,
    pub alt_text: Option<String>,
    pub caption: Option<String>,
    pub sort_order: i32,
}

/// Remote content database seen from the site. Implemented by the host.
///
/// Every query defaults to [`ContentError::Unconfigured`], so a source only
/// implements the tables it actually has.
pub trait ContentSource {
    fn about_sections(&self) -> Result<Vec<AboutSection>, ContentError> {
        Err(ContentError::Unconfigured)
    }

    fn projects(&self) -> Result<Vec<ProjectEntry>, ContentError> {
        Err(ContentError::Unconfigured)
    }

    fn experiences(&self) -> Result<Vec<ExperienceEntry>, ContentError> {
        Err(ContentError::Unconfigured)
    }

    /// Photos of one album; inactive albums yield nothing.
    fn photos(&self, _album_key: &str) -> Result<Vec<Photo>, ContentError> {
        Err(ContentError::Unconfigured)
    }
}

/// Used when no database is reachable.
pub struct NoContent;

impl ContentSource for NoContent {}

trait Listed {
    fn is_active(&self) -> bool;
    fn sort_order(&self) -> i32;
}

impl Listed for AboutSection {
    fn is_active(&self) -> bool {
        self.active
    }
    fn sort_order(&self) -> i32 {
        self.sort_order
    }
}

impl Listed for ProjectEntry {
    fn is_active(&self) -> bool {
        self.active
    }
    fn sort_order(&self) -> i32 {
        self.sort_order
    }
}

impl Listed for ExperienceEntry {
    fn is_active(&self) -> bool {
        self.active
    }
    fn sort_order(&self) -> i32 {
        self.sort_order
    }
}

impl Listed for Photo {
    fn is_active(&self) -> bool {
        true
    }
    fn sort_order(&self) -> i32 {
        self.sort_order
    }
}

// Active rows in display order, or the built-in copy when the query fails or
// leaves nothing to show.
fn active_or_fallback<T: Listed>(
    what: &str,
    fetched: Result<Vec<T>, ContentError>,
    fallback: fn() -> Vec<T>,
) -> Vec<T> {
    match fetched {
        Ok(rows) => {
            let mut active: Vec<T> = rows.into_iter().filter(Listed::is_active).collect();
            if active.is_empty() {
                log::info!("[content] no active {}, using fallback", what);
                return fallback();
            }
            active.sort_by_key(Listed::sort_order);
            active
        }
        Err(e) => {
            log::warn!("[content] {}: {}, using fallback", what, e);
            fallback()
        }
    }
}

pub fn fallback_about_sections() -> Vec<AboutSection> {
    let section = |id: u32, key: &str, title: &str, content: &str| AboutSection {
        id,
        key: key.to_owned(),
        title: Some(title.to_owned()),
        content: content.to_owned(),
        active: true,
        sort_order: id as i32,
    };
    vec![
        section(
            1,
            "creative-technologist",
            "Creative Technologist",
            "Crafting visually striking, vintage-inspired and unconventional digital designs \
             that combine front-end, back-end, databases and APIs with a strong artistic identity.",
        ),
        section(
            2,
            "full-stack",
            "Full-Stack & Applied Computing Projects",
            "Designed and shipped a complete web platform from scratch, an industrial Unity \
             integration and a Swift application built around social impact.",
        ),
        section(
            3,
            "systems",
            "Systems, Architecture & Low-Level Computing",
            "Object-oriented C++, software and web architecture, assembly, and computing \
             applied to computational biology.",
        ),
        section(
            4,
            "foundations",
            "Foundations of Computer Science",
            "HTML, CSS, C++ and Python: language fundamentals, data structures and \
             practice-driven projects.",
        ),
    ]
}

pub fn about_sections_or_fallback(source: &dyn ContentSource) -> Vec<AboutSection> {
    active_or_fallback(
        "about sections",
        source.about_sections(),
        fallback_about_sections,
    )
}

pub fn projects_or_fallback(source: &dyn ContentSource) -> Vec<ProjectEntry> {
    active_or_fallback("projects", source.projects(), fallback_projects)
}

pub fn experiences_or_fallback(source: &dyn ContentSource) -> Vec<ExperienceEntry> {
    active_or_fallback("experiences", source.experiences(), fallback_experiences)
}

pub fn photos_or_fallback(source: &dyn ContentSource, album_key: &str) -> Vec<Photo> {
    active_or_fallback("photos", source.photos(album_key), fallback_photos)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

pub fn fallback_projects() -> Vec<ProjectEntry> {
    let project = |id: u32, title: &str, summary: &str, tags: &[&str], image: &str, alt: &str, link: Option<&str>| {
        ProjectEntry {
            id,
            title: title.to_owned(),
            summary: summary.to_owned(),
            tags: strings(tags),
            image: image.to_owned(),
            image_alt: Some(alt.to_owned()),
            link: link.map(str::to_owned),
            active: true,
            sort_order: id as i32,
        }
    };
    vec![
        project(
            1,
            "Caritas Donation Swift App",
            "A modern iOS solution built with Swift to optimize donation flows, bazar \
             coordination and impact tracking through maps, dashboards and intelligent tools.",
            &["Swift", "iOS", "Maps", "Dashboards"],
            "/projects/caritas-mockup.jpg",
            "Caritas app preview",
            Some("https://github.com/victorvalero6/Caritas-de-Monterrey.git"),
        ),
        project(
            2,
            "Web Frontend - Backend",
            "A full-stack React web application built for Whirlpool with authentication, \
             user and admin pages, database integration and a connected Unity game.",
            &["React", "Unity", "Full-Stack", "Database"],
            "/projects/whirlpool.jpg",
            "Whirlpool project preview",
            Some("https://github.com/victorvalero6/Whirlpool-React-Web.git"),
        ),
        project(
            3,
            "Mobile Banking App",
            "Cross-platform mobile application for digital banking.",
            &["React Native", "Firebase", "Plaid"],
            "/projects/mobile-app.jpg",
            "Mobile app preview",
            None,
        ),
        project(
            4,
            "Survival Space Game",
            "Fast-paced arcade space shooter built with vanilla JavaScript and HTML5 Canvas: \
             enemies, power-ups, screen-clearing black holes and a final boss.",
            &["JavaScript", "HTML5 Canvas", "Game Dev"],
            "/projects/space-game.jpg",
            "Space game preview",
            Some("https://github.com/victorvalero6/Space-Game-.git"),
        ),
    ]
}

pub fn fallback_experiences() -> Vec<ExperienceEntry> {
    let entry = |id: u32, period: &str, role: &str, focus: Option<&str>, desc: &str, skills: &[&str]| {
        ExperienceEntry {
            id,
            period: period.to_owned(),
            role: role.to_owned(),
            focus: focus.map(str::to_owned),
            desc: desc.to_owned(),
            skills: strings(skills),
            active: true,
            sort_order: id as i32,
        }
    };
    vec![
        entry(
            1,
            "2023",
            "Foundations of Computer Science",
            None,
            "Built a solid base in HTML, CSS, C++ and Python: language fundamentals, data \
             structures and practice-driven projects.",
            &["Programming Fundamentals", "Data Structures", "OOP Thinking"],
        ),
        entry(
            2,
            "2024",
            "Systems, Architecture & Low-Level Computing",
            None,
            "Object-oriented C++, software and web architecture, assembly language and \
             computing applied to computational biology.",
            &["OOP", "Software Architecture", "Assembly", "Computational Biology", "Git"],
        ),
        entry(
            3,
            "2025",
            "Full-Stack & Applied Computing Projects",
            None,
            "A complete web platform built and deployed from scratch, an industrial Unity \
             integration for Whirlpool and a Swift application for Caritas de Monterrey.",
            &["Full-Stack Development", "Swift", "Unity", "Databases", "APIs", "Functional Programming"],
        ),
        entry(
            4,
            "2026 - Present",
            "Creative Technologist",
            Some("Design & Engineering Focus"),
            "Crafting visually striking, vintage-inspired and unconventional digital designs \
             that combine front-end, back-end, databases and APIs with a strong artistic identity.",
            &["Creative Direction", "Frontend", "Backend", "APIs", "Visual Systems", "Mobile"],
        ),
    ]
}

pub fn fallback_photos() -> Vec<Photo> {
    [
        "Childhood memories",
        "Class gathering",
        "Event at the stadium",
        "Arcade nights",
    ]
    .iter()
    .enumerate()
    .map(|(i, caption)| Photo {
        id: i as u32 + 1,
        image_url: format!("/photos/photo{}.png", i + 1),
        alt_text: Some(format!("Memory {:02}", i + 1)),
        caption: Some((*caption).to_owned()),
        sort_order: i as i32,
    })
    .collect()
}

impl fmt::Display for AboutSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.title {
            Some(t) => write!(f, "{}: {}", t, self.content),
            None => f.write_str(&self.content),
        }
    }
}
