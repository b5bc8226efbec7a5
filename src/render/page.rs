//! The page template: one function per section, assembled in source order.
//!
//! Field values are interpolated into the markup without HTML escaping.
//! The configuration file is the operator's own content, never external
//! input; entities and emoji in it must pass through exactly as written,
//! and escaping here would change the visual output of existing sites.

use super::derived::Derived;
use super::error::TemplateFieldError;
use super::view::Node;
use crate::embed::page::{APP_JS, STYLE_CSS, ScriptVars, ThemeVars};
use serde_json::Value;

/// Social platforms the contact section knows how to link, with their
/// Font Awesome icon classes. Order here is render order.
const SOCIAL_PLATFORMS: &[(&str, &str, &str)] = &[
    ("github", "fab fa-github", "GitHub"),
    ("linkedin", "fab fa-linkedin-in", "LinkedIn"),
    ("twitter", "fab fa-twitter", "Twitter"),
    ("leetcode", "fas fa-code", "LeetCode"),
    ("devto", "fab fa-dev", "Dev.to"),
    ("medium", "fab fa-medium", "Medium"),
    ("stackoverflow", "fab fa-stack-overflow", "StackOverflow"),
];

/// Render the full HTML document.
pub fn render_page(
    doc: &Value,
    derived: &Derived,
    json_data: &str,
) -> Result<String, TemplateFieldError> {
    let cfg = Node::root(doc);

    let mut out = String::with_capacity(64 * 1024);
    out.push_str(&head(&cfg)?);
    out.push_str(&navbar(&cfg)?);
    out.push_str(&hero(&cfg, derived)?);
    out.push_str(&about(&cfg)?);
    out.push_str(&skills(&cfg)?);
    out.push_str(&experience(&cfg)?);
    out.push_str(&projects(&cfg, derived)?);
    out.push_str(&education(&cfg)?);
    out.push_str(&achievements(&cfg)?);
    out.push_str(&testimonials(&cfg)?);
    out.push_str(&contact(&cfg)?);
    out.push_str(&footer(&cfg)?);
    out.push_str(&scripts(&cfg, json_data)?);
    out.push_str("</body>\n</html>\n");
    Ok(out)
}

/// Document head: title, favicon glyph, web fonts, inline stylesheet with
/// theme tokens substituted. Opens `<body>` and lays down the background
/// effect layers.
fn head(cfg: &Node) -> Result<String, TemplateFieldError> {
    let meta = cfg.require("meta")?;
    let theme = cfg.require("theme")?;

    let title = meta.require_scalar("title")?;
    let favicon = meta.require_scalar("favicon")?;
    let font = theme.require_scalar("font_heading")?;
    let css = STYLE_CSS.render(&theme_vars(&theme)?);

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en" data-theme="dark">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="icon" href="data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>{favicon}</text></svg>">
    <link href="https://fonts.googleapis.com/css2?family={font}:wght@300;400;500;600;700;800;900&display=swap" rel="stylesheet">
    <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css">
    <style>
{css}
    </style>
</head>
<body>
    <div class="bg-grid"></div>
    <div class="bg-glow bg-glow-1"></div>
    <div class="bg-glow bg-glow-2"></div>
    <div class="bg-glow bg-glow-3"></div>
    <div class="cursor-glow" id="cursorGlow"></div>
"#
    ))
}

fn theme_vars(theme: &Node) -> Result<ThemeVars, TemplateFieldError> {
    Ok(ThemeVars {
        primary: theme.require_scalar("primary_color")?,
        secondary: theme.require_scalar("secondary_color")?,
        accent: theme.require_scalar("accent_color")?,
        dark_bg: theme.require_scalar("dark_bg")?,
        card_bg: theme.require_scalar("card_bg")?,
        text: theme.require_scalar("text_color")?,
        heading: theme.require_scalar("heading_color")?,
        gradient_start: theme.require_scalar("gradient_start")?,
        gradient_end: theme.require_scalar("gradient_end")?,
        font_heading: theme.require_scalar("font_heading")?,
    })
}

fn navbar(cfg: &Node) -> Result<String, TemplateFieldError> {
    let name = cfg.require("personal")?.require_scalar("name")?;
    let logo = name.split_whitespace().next().unwrap_or_default().to_string();

    Ok(format!(
        r##"
    <nav class="navbar" id="navbar">
        <a href="#" class="nav-logo">&lt;{logo} /&gt;</a>
        <div class="nav-links" id="navLinks">
            <a href="#about">About</a>
            <a href="#skills">Skills</a>
            <a href="#experience">Experience</a>
            <a href="#projects">Projects</a>
            <a href="#education">Education</a>
            <a href="#contact" class="nav-cta">Contact</a>
        </div>
        <div class="hamburger" id="hamburger" onclick="toggleMenu()">
            <span></span><span></span><span></span>
        </div>
    </nav>
"##
    ))
}

fn hero(cfg: &Node, derived: &Derived) -> Result<String, TemplateFieldError> {
    let personal = cfg.require("personal")?;
    let name = personal.require_scalar("name")?;
    let tagline = personal.require_scalar("tagline")?;
    let resume_link = personal.require_scalar("resume_link")?;

    let badge = if personal.get("available_for_hire").is_some_and(|n| n.truthy()) {
        r#"            <div class="hero-badge">
                <span class="pulse"></span> Available for opportunities
            </div>
"#
    } else {
        ""
    };

    let years = cfg.len_of("experience");
    let project_count = cfg.len_of("projects");
    let total_tech = derived.total_tech;

    Ok(format!(
        r##"
    <section class="hero" id="hero">
        <div class="hero-content">
{badge}            <h1>Hi, I'm <span class="gradient-text">{name}</span></h1>
            <h1 style="font-size:clamp(1.5rem,3vw,2.5rem);font-weight:600;color:var(--text);opacity:0.7;">
                <span class="typing-container"><span class="typing-text" id="typingText"></span></span>
            </h1>
            <p class="hero-subtitle">{tagline}</p>
            <div class="hero-actions">
                <a href="#projects" class="btn btn-primary">
                    <i class="fas fa-rocket"></i> View My Work
                </a>
                <a href="{resume_link}" class="btn btn-outline" target="_blank">
                    <i class="fas fa-download"></i> Download Resume
                </a>
                <a href="#contact" class="btn btn-outline">
                    <i class="fas fa-paper-plane"></i> Get in Touch
                </a>
            </div>
            <div class="hero-stats">
                <div class="stat-item">
                    <div class="stat-number" data-count="{years}">0+</div>
                    <div class="stat-label">Years Experience</div>
                </div>
                <div class="stat-item">
                    <div class="stat-number" data-count="{project_count}">0+</div>
                    <div class="stat-label">Projects Built</div>
                </div>
                <div class="stat-item">
                    <div class="stat-number" data-count="{total_tech}">0+</div>
                    <div class="stat-label">Technologies</div>
                </div>
            </div>
        </div>
        <div class="hero-scroll">
            <span>Scroll Down</span>
            <i class="fas fa-chevron-down"></i>
        </div>
    </section>
"##
    ))
}

fn about(cfg: &Node) -> Result<String, TemplateFieldError> {
    let personal = cfg.require("personal")?;
    let name = personal.require_scalar("name")?;
    let bio = personal.require_scalar("bio")?;

    let portrait = match personal.get("profile_image") {
        Some(img) if img.truthy() => {
            let src = img.scalar()?;
            format!(r#"<img src="{src}" alt="{name}">"#)
        }
        _ => r#"<div class="about-image-placeholder">👨‍💻</div>"#.to_string(),
    };

    Ok(format!(
        r#"
    <section id="about">
        <div class="section-header reveal">
            <span class="section-label">About Me</span>
            <h2 class="section-title">Get to know me</h2>
        </div>
        <div class="about-grid">
            <div class="about-image-wrapper reveal">
                <div class="about-image-frame">
                    {portrait}
                </div>
            </div>
            <div class="about-text reveal">
                <h3>A passionate engineer who loves building things</h3>
                <p>{bio}</p>
                <div class="about-tags">
                    <span class="about-tag">🎯 Problem Solver</span>
                    <span class="about-tag">🚀 Fast Learner</span>
                    <span class="about-tag">🤝 Team Player</span>
                    <span class="about-tag">📐 Clean Code Advocate</span>
                    <span class="about-tag">🌍 Open Source Enthusiast</span>
                </div>
            </div>
        </div>
    </section>
"#
    ))
}

fn skills(cfg: &Node) -> Result<String, TemplateFieldError> {
    let mut cards = String::new();
    for group in cfg.list("skills")? {
        let icon = group.require_scalar("icon")?;
        let category = group.require_scalar("category")?;

        let mut rows = String::new();
        for item in group.require("items")?.items()? {
            let item_name = item.require_scalar("name")?;
            let level = item.require_scalar("level")?;
            rows.push_str(&format!(
                r#"                <div class="skill-item">
                    <div class="skill-info">
                        <span class="skill-name">{item_name}</span>
                        <span class="skill-pct">{level}%</span>
                    </div>
                    <div class="skill-bar">
                        <div class="skill-fill" data-width="{level}"></div>
                    </div>
                </div>
"#
            ));
        }

        cards.push_str(&format!(
            r#"            <div class="skill-card reveal">
                <div class="skill-card-header">
                    <span class="skill-card-icon">{icon}</span>
                    <span class="skill-card-title">{category}</span>
                </div>
{rows}            </div>
"#
        ));
    }

    Ok(format!(
        r#"
    <section id="skills">
        <div class="section-header reveal">
            <span class="section-label">Skills</span>
            <h2 class="section-title">Technologies I work with</h2>
            <p class="section-desc">Crafting solutions with the right tools for each challenge</p>
        </div>
        <div class="skills-grid">
{cards}        </div>
    </section>
"#
    ))
}

fn experience(cfg: &Node) -> Result<String, TemplateFieldError> {
    let mut entries = String::new();
    for exp in cfg.list("experience")? {
        let company = exp.require_scalar("company")?;
        let role = exp.require_scalar("role")?;
        let duration = exp.require_scalar("duration")?;
        let location = exp.require_scalar("location")?;
        let job_type = exp.require_scalar("type")?;

        let mut points = String::new();
        for point in exp.require("description")?.items()? {
            let text = point.scalar()?;
            points.push_str(&format!("                    <li>{text}</li>\n"));
        }

        let mut tags = String::new();
        for tag in exp.require("tech")?.items()? {
            let text = tag.scalar()?;
            tags.push_str(&format!("                    <span>{text}</span>\n"));
        }

        entries.push_str(&format!(
            r#"            <div class="timeline-item reveal">
                <div class="timeline-dot"></div>
                <div class="timeline-header">
                    <div>
                        <div class="timeline-company">{company}</div>
                        <div class="timeline-role">{role}</div>
                    </div>
                    <div class="timeline-meta">
                        <div class="timeline-duration">{duration}</div>
                        <div class="timeline-location">📍 {location}</div>
                        <span class="timeline-type">{job_type}</span>
                    </div>
                </div>
                <ul class="timeline-points">
{points}                </ul>
                <div class="timeline-tech">
{tags}                </div>
            </div>
"#
        ));
    }

    Ok(format!(
        r#"
    <section id="experience">
        <div class="section-header reveal">
            <span class="section-label">Experience</span>
            <h2 class="section-title">Where I've worked</h2>
            <p class="section-desc">My professional journey and contributions</p>
        </div>
        <div class="timeline">
{entries}        </div>
    </section>
"#
    ))
}

fn projects(cfg: &Node, derived: &Derived) -> Result<String, TemplateFieldError> {
    let mut filters = String::from(
        r#"            <button class="filter-btn active" onclick="filterProjects('all')">All</button>
"#,
    );
    for cat in &derived.categories {
        filters.push_str(&format!(
            r#"            <button class="filter-btn" onclick="filterProjects('{cat}')">{cat}</button>
"#
        ));
    }

    let mut cards = String::new();
    for proj in cfg.list("projects")? {
        let category = proj.require_scalar("category")?;
        let title = proj.require_scalar("title")?;
        let description = proj.require_scalar("description")?;

        let image = match proj.get("image") {
            Some(img) if img.truthy() => {
                let src = img.scalar()?;
                format!(r#"<img src="{src}" alt="{title}">"#)
            }
            _ => r#"<div class="project-image-placeholder">🚀</div>"#.to_string(),
        };
        let featured = if proj.get("featured").is_some_and(|n| n.truthy()) {
            r#"
                    <span class="featured-badge">FEATURED</span>"#
        } else {
            ""
        };

        let mut tags = String::new();
        for tag in proj.require("tech")?.items()? {
            let text = tag.scalar()?;
            tags.push_str(&format!("                        <span>{text}</span>\n"));
        }

        let mut links = String::new();
        if let Some(github) = proj.get("github") {
            let url = github.scalar()?;
            links.push_str(&format!(
                r#"                        <a href="{url}" class="project-link project-link-code" target="_blank">
                            <i class="fab fa-github"></i> Code
                        </a>
"#
            ));
        }
        if let Some(live) = proj.get("live") {
            let url = live.scalar()?;
            links.push_str(&format!(
                r#"                        <a href="{url}" class="project-link project-link-live" target="_blank">
                            <i class="fas fa-external-link-alt"></i> Live Demo
                        </a>
"#
            ));
        }

        cards.push_str(&format!(
            r#"            <div class="project-card reveal" data-category="{category}">
                <div class="project-image">
                    {image}{featured}
                </div>
                <div class="project-body">
                    <div class="project-category">{category}</div>
                    <div class="project-title">{title}</div>
                    <div class="project-desc">{description}</div>
                    <div class="project-tech">
{tags}                    </div>
                    <div class="project-links">
{links}                    </div>
                </div>
            </div>
"#
        ));
    }

    Ok(format!(
        r#"
    <section id="projects">
        <div class="section-header reveal">
            <span class="section-label">Projects</span>
            <h2 class="section-title">Things I've built</h2>
            <p class="section-desc">A selection of work I'm proud of</p>
        </div>
        <div class="project-filters reveal">
{filters}        </div>
        <div class="projects-grid">
{cards}        </div>
    </section>
"#
    ))
}

/// Education cards plus the certification grid, which shares the section.
fn education(cfg: &Node) -> Result<String, TemplateFieldError> {
    let mut cards = String::new();
    for edu in cfg.list("education")? {
        let institution = edu.require_scalar("institution")?;
        let degree = edu.require_scalar("degree")?;
        let duration = edu.require_scalar("duration")?;
        let gpa = edu.require_scalar("gpa")?;

        let mut extras = String::new();
        if let Some(coursework) = edu.get("coursework")
            && coursework.truthy()
        {
            extras.push_str(
                "            <div class=\"edu-section-label\">Relevant Coursework</div>\n            <div class=\"edu-chips\">\n",
            );
            for course in coursework.items()? {
                let text = course.scalar()?;
                extras.push_str(&format!(
                    "                <span class=\"edu-chip\">{text}</span>\n"
                ));
            }
            extras.push_str("            </div>\n");
        }
        if let Some(achievements) = edu.get("achievements")
            && achievements.truthy()
        {
            extras.push_str("            <div class=\"edu-section-label\">Achievements</div>\n");
            for ach in achievements.items()? {
                let text = ach.scalar()?;
                extras.push_str(&format!(
                    "            <div class=\"edu-achievement\">{text}</div>\n"
                ));
            }
        }

        cards.push_str(&format!(
            r#"        <div class="edu-card reveal">
            <div class="edu-institution">🎓 {institution}</div>
            <div class="edu-degree">{degree}</div>
            <div class="edu-meta">
                <span>📅 {duration}</span>
                <span>📊 GPA: {gpa}</span>
            </div>
{extras}        </div>
"#
        ));
    }

    let mut certs = String::new();
    if cfg.get("certifications").is_some_and(|n| n.truthy()) {
        certs.push_str("        <div class=\"certs-grid\">\n");
        for cert in cfg.require("certifications")?.items()? {
            let link = cert.require_scalar("link")?;
            let cert_name = cert.require_scalar("name")?;
            let issuer = cert.require_scalar("issuer")?;
            let date = cert.require_scalar("date")?;
            certs.push_str(&format!(
                r#"            <a href="{link}" class="cert-card reveal" target="_blank">
                <div class="cert-icon">📜</div>
                <div class="cert-name">{cert_name}</div>
                <div class="cert-issuer">{issuer}</div>
                <div class="cert-date">{date}</div>
            </a>
"#
            ));
        }
        certs.push_str("        </div>\n");
    }

    Ok(format!(
        r#"
    <section id="education">
        <div class="section-header reveal">
            <span class="section-label">Education</span>
            <h2 class="section-title">Academic background</h2>
        </div>
{cards}{certs}    </section>
"#
    ))
}

/// Optional section: no `achievements` key means no markup at all.
fn achievements(cfg: &Node) -> Result<String, TemplateFieldError> {
    let Some(list) = cfg.get("achievements").filter(|n| n.truthy()) else {
        return Ok(String::new());
    };

    let mut cards = String::new();
    for ach in list.items()? {
        let icon = ach.require_scalar("icon")?;
        let title = ach.require_scalar("title")?;
        let description = ach.require_scalar("description")?;
        cards.push_str(&format!(
            r#"            <div class="achieve-card reveal">
                <div class="achieve-icon">{icon}</div>
                <div class="achieve-title">{title}</div>
                <div class="achieve-desc">{description}</div>
            </div>
"#
        ));
    }

    Ok(format!(
        r#"
    <section id="achievements">
        <div class="section-header reveal">
            <span class="section-label">Achievements</span>
            <h2 class="section-title">Milestones along the way</h2>
        </div>
        <div class="achievements-grid">
{cards}        </div>
    </section>
"#
    ))
}

/// Optional section: no `testimonials` key means no markup at all.
fn testimonials(cfg: &Node) -> Result<String, TemplateFieldError> {
    let Some(list) = cfg.get("testimonials").filter(|n| n.truthy()) else {
        return Ok(String::new());
    };

    let mut cards = String::new();
    for entry in list.items()? {
        let text = entry.require_scalar("text")?;
        let who = entry.require_scalar("name")?;
        let role = entry.require_scalar("role")?;
        let avatar = who.chars().next().map(String::from).unwrap_or_default();
        cards.push_str(&format!(
            r#"            <div class="testimonial-card reveal">
                <div class="testimonial-quote">“</div>
                <div class="testimonial-text">{text}</div>
                <div class="testimonial-footer">
                    <div class="testimonial-avatar">{avatar}</div>
                    <div>
                        <div class="testimonial-name">{who}</div>
                        <div class="testimonial-role">{role}</div>
                    </div>
                </div>
            </div>
"#
        ));
    }

    Ok(format!(
        r#"
    <section id="testimonials">
        <div class="section-header reveal">
            <span class="section-label">Testimonials</span>
            <h2 class="section-title">What people say</h2>
        </div>
        <div class="testimonials-grid">
{cards}        </div>
    </section>
"#
    ))
}

fn contact(cfg: &Node) -> Result<String, TemplateFieldError> {
    let personal = cfg.require("personal")?;
    let email = personal.require_scalar("email")?;

    let mut links = format!(
        r#"                <a href="mailto:{email}" class="contact-link">
                    <i class="fas fa-envelope"></i> {email}
                </a>
"#
    );
    if let Some(phone) = personal.get("phone").filter(|n| n.truthy()) {
        let phone = phone.scalar()?;
        links.push_str(&format!(
            r#"                <a href="tel:{phone}" class="contact-link">
                    <i class="fas fa-phone"></i> {phone}
                </a>
"#
        ));
    }
    if let Some(location) = personal.get("location").filter(|n| n.truthy()) {
        let location = location.scalar()?;
        links.push_str(&format!(
            r#"                <span class="contact-link">
                    <i class="fas fa-map-marker-alt"></i> {location}
                </span>
"#
        ));
    }

    let mut socials = String::new();
    if let Some(social) = cfg.get("social") {
        for (key, icon, label) in SOCIAL_PLATFORMS {
            if let Some(url) = social.get(key) {
                let url = url.scalar()?;
                socials.push_str(&format!(
                    r#"                <a href="{url}" class="social-link" target="_blank" title="{label}"><i class="{icon}"></i></a>
"#
                ));
            }
        }
    }

    Ok(format!(
        r#"
    <section id="contact">
        <div class="section-header reveal">
            <span class="section-label">Contact</span>
            <h2 class="section-title">Let's work together</h2>
        </div>
        <div class="contact-box reveal">
            <p>I'm always open to discussing new opportunities and interesting projects.</p>
            <div class="contact-links">
{links}            </div>
            <div class="social-links">
{socials}            </div>
        </div>
    </section>
"#
    ))
}

fn footer(cfg: &Node) -> Result<String, TemplateFieldError> {
    let foot = cfg.require("footer")?;
    let copyright = foot.require_scalar("copyright")?;
    let tagline = foot.require_scalar("tagline")?;
    let name = cfg.require("personal")?.require_scalar("name")?;

    Ok(format!(
        "
    <footer>
        <p>© {copyright} {name}. {tagline}</p>
    </footer>
"
    ))
}

/// Embedded config JSON (the seam for client-side refresh) and the client
/// script with typing titles injected.
fn scripts(cfg: &Node, json_data: &str) -> Result<String, TemplateFieldError> {
    let title = cfg.require("personal")?.require_scalar("title")?;

    let mut titles = vec![title];
    for group in cfg.list("skills")? {
        titles.push(format!("{} Expert", group.require_scalar("category")?));
    }
    titles.push("Problem Solver".to_string());
    let typing_titles = serde_json::to_string(&titles).unwrap_or_else(|_| "[]".into());

    let js = APP_JS.render(&ScriptVars { typing_titles });

    Ok(format!(
        r#"
    <script id="config-data" type="application/json">{json_data}</script>
    <script>
{js}    </script>
"#
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_doc() -> Value {
        json!({
            "meta": {"title": "Ada Lovelace — Portfolio", "favicon": "🚀"},
            "theme": {
                "primary_color": "#6c63ff", "secondary_color": "#ff6584",
                "accent_color": "#00d89b", "dark_bg": "#0a0a1a",
                "card_bg": "#12122a", "text_color": "#b8b8d0",
                "heading_color": "#ffffff", "gradient_start": "#6c63ff",
                "gradient_end": "#00d89b", "font_heading": "Inter"
            },
            "personal": {
                "name": "Ada Lovelace",
                "title": "Software Engineer",
                "tagline": "I build things that matter",
                "bio": "Engineer with a love for elegant machines.",
                "email": "ada@example.com",
                "resume_link": "/static/resume.pdf",
                "available_for_hire": true,
                "location": "London, UK"
            },
            "skills": [
                {"category": "Backend", "icon": "⚙️", "items": [
                    {"name": "Rust", "level": 95},
                    {"name": "Python", "level": 88}
                ]},
                {"category": "Frontend", "icon": "🎨", "items": [
                    {"name": "TypeScript", "level": 80}
                ]}
            ],
            "experience": [{
                "company": "Analytical Engines Ltd",
                "role": "Principal Engineer",
                "duration": "2020 — Present",
                "location": "London",
                "type": "Full-time",
                "description": ["Designed the core pipeline", "Cut latency by 40%"],
                "tech": ["Rust", "PostgreSQL"]
            }],
            "projects": [
                {"title": "Difference Engine", "category": "Systems",
                 "description": "A mechanical marvel", "tech": ["Brass", "Steam"],
                 "featured": true, "github": "https://github.com/ada/engine"},
                {"title": "Notes", "category": "Web",
                 "description": "Annotated translations", "tech": ["HTML"]},
                {"title": "Tables", "category": "Systems",
                 "description": "Computation tables", "tech": ["Math"]}
            ],
            "education": [{
                "institution": "Home Tutoring",
                "degree": "Mathematics",
                "duration": "1833 — 1842",
                "gpa": "4.0",
                "coursework": ["Calculus", "Logic"]
            }],
            "social": {"github": "https://github.com/ada"},
            "footer": {"copyright": "2026", "tagline": "Built with curiosity."}
        })
    }

    fn render(doc: &Value) -> String {
        let derived = Derived::compute(doc);
        let json_data = serde_json::to_string(doc).unwrap();
        render_page(doc, &derived, &json_data).unwrap()
    }

    #[test]
    fn test_render_is_deterministic() {
        let doc = sample_doc();
        assert_eq!(render(&doc), render(&doc));
    }

    #[test]
    fn test_render_contains_name_and_title() {
        let html = render(&sample_doc());
        assert!(html.contains("Ada Lovelace"));
        assert!(html.contains("<title>Ada Lovelace — Portfolio</title>"));
    }

    #[test]
    fn test_theme_tokens_substituted() {
        let html = render(&sample_doc());
        assert!(html.contains("--primary: #6c63ff;"));
        assert!(!html.contains("__PRIMARY__"));
    }

    #[test]
    fn test_embedded_config_json() {
        let doc = sample_doc();
        let html = render(&doc);
        let json_data = serde_json::to_string(&doc).unwrap();
        assert!(html.contains(&json_data));
    }

    #[test]
    fn test_missing_project_title_fails_with_path() {
        let mut doc = sample_doc();
        doc["projects"][1].as_object_mut().unwrap().remove("title");

        let derived = Derived::compute(&doc);
        let err = render_page(&doc, &derived, "{}").unwrap_err();
        assert_eq!(err.path().as_str(), "projects[1].title");
    }

    #[test]
    fn test_missing_skill_level_fails_whole_render() {
        let mut doc = sample_doc();
        doc["skills"][0]["items"][1].as_object_mut().unwrap().remove("level");

        let derived = Derived::compute(&doc);
        let err = render_page(&doc, &derived, "{}").unwrap_err();
        assert_eq!(err.path().as_str(), "skills[0].items[1].level");
    }

    #[test]
    fn test_no_testimonials_key_no_markup() {
        let html = render(&sample_doc());
        assert!(!html.contains("testimonial-card"));
        assert!(!html.contains("id=\"testimonials\""));
    }

    #[test]
    fn test_one_testimonial_renders_one_block() {
        let mut doc = sample_doc();
        doc["testimonials"] = json!([
            {"text": "Brilliant to work with.", "name": "Charles B.", "role": "Collaborator"}
        ]);
        let html = render(&doc);
        assert_eq!(html.matches("testimonial-card").count(), 1);
        assert!(html.contains("Brilliant to work with."));
        assert!(html.contains("Charles B."));
    }

    #[test]
    fn test_availability_badge_follows_flag() {
        let mut doc = sample_doc();
        assert!(render(&doc).contains("Available for opportunities"));

        doc["personal"]["available_for_hire"] = json!(false);
        assert!(!render(&doc).contains("Available for opportunities"));
    }

    #[test]
    fn test_optional_phone() {
        let mut doc = sample_doc();
        assert!(!render(&doc).contains("tel:"));

        doc["personal"]["phone"] = json!("+44 123 456");
        let html = render(&doc);
        assert!(html.contains("tel:+44 123 456"));
    }

    #[test]
    fn test_filter_buttons_first_occurrence_order() {
        let html = render(&sample_doc());
        let systems = html.find("filterProjects('Systems')").unwrap();
        let web = html.find("filterProjects('Web')").unwrap();
        assert!(systems < web);
        assert_eq!(html.matches("filterProjects('Systems')").count(), 1);
    }

    #[test]
    fn test_nested_repetition_preserves_order() {
        let html = render(&sample_doc());
        let rust = html.find("<span class=\"skill-name\">Rust</span>").unwrap();
        let python = html.find("<span class=\"skill-name\">Python</span>").unwrap();
        let ts = html.find("<span class=\"skill-name\">TypeScript</span>").unwrap();
        assert!(rust < python && python < ts);
    }

    #[test]
    fn test_values_not_escaped() {
        let mut doc = sample_doc();
        doc["personal"]["bio"] = json!("I <b>love</b> &amp; ship");
        let html = render(&doc);
        assert!(html.contains("I <b>love</b> &amp; ship"));
    }

    #[test]
    fn test_unlinked_social_platforms_omitted() {
        let html = render(&sample_doc());
        assert!(html.contains("fab fa-github"));
        assert!(!html.contains("fab fa-linkedin-in"));
    }
}
