use crate::site::SectionId;

pub const SITE_NAME: &str = "Harper";

pub struct NavLink {
    pub name: &'static str,
    pub target: SectionId,
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink {
        name: "Home",
        target: SectionId::Home,
    },
    NavLink {
        name: "About",
        target: SectionId::About,
    },
    NavLink {
        name: "Services",
        target: SectionId::Services,
    },
    NavLink {
        name: "Work",
        target: SectionId::Work,
    },
    NavLink {
        name: "Contact",
        target: SectionId::Contact,
    },
];

// -- Hero --------------------------------------------------------------

pub const HERO_BADGE: &str = "Available for New Projects";
pub const HERO_HEADLINE: [&str; 2] = ["Crafting Digital", "Experiences"];
pub const HERO_SUBHEADLINE: &str = "Premium design and development that transforms your vision \
into reality. I create stunning websites that convert visitors into customers.";

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const HERO_STATS: [Stat; 3] = [
    Stat {
        value: "50+",
        label: "Projects Completed",
    },
    Stat {
        value: "30+",
        label: "Happy Clients",
    },
    Stat {
        value: "5+",
        label: "Years Experience",
    },
];

// -- About -------------------------------------------------------------

pub const ABOUT_TITLE: &str = "Passionate About Creating Digital Excellence";
pub const ABOUT_INTRO: &str = "I'm a full-stack developer and designer with over 5 years of \
experience building digital products that make a difference.";
pub const ABOUT_PARAGRAPHS: [&str; 3] = [
    "Hello! I'm a creative developer based in San Francisco, passionate about crafting \
beautiful and functional digital experiences. With a background in both design and \
development, I bring a unique perspective to every project.",
    "My journey began 5 years ago when I built my first website. Since then, I've had the \
privilege of working with startups, agencies, and Fortune 500 companies, helping them bring \
their digital visions to life.",
    "I believe in clean code, user-centered design, and continuous learning. Every project \
is an opportunity to push boundaries and create something meaningful.",
];

pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

pub const SKILLS: [Skill; 6] = [
    Skill {
        name: "React & Next.js",
        level: 95,
    },
    Skill {
        name: "TypeScript",
        level: 90,
    },
    Skill {
        name: "Tailwind CSS",
        level: 95,
    },
    Skill {
        name: "Node.js",
        level: 85,
    },
    Skill {
        name: "UI/UX Design",
        level: 90,
    },
    Skill {
        name: "Figma",
        level: 88,
    },
];

pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
}

pub const HIGHLIGHTS: [Highlight; 6] = [
    Highlight {
        title: "Web Development",
        description: "Building fast, scalable web applications",
    },
    Highlight {
        title: "UI/UX Design",
        description: "Creating beautiful user experiences",
    },
    Highlight {
        title: "Performance",
        description: "Optimizing for speed and conversion",
    },
    Highlight {
        title: "Strategy",
        description: "Data-driven digital solutions",
    },
    Highlight {
        title: "Collaboration",
        description: "Working closely with clients",
    },
    Highlight {
        title: "Innovation",
        description: "Latest tech and best practices",
    },
];

// -- Services ----------------------------------------------------------

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 4],
    pub price: &'static str,
}

pub const SERVICES: [Service; 6] = [
    Service {
        title: "Website Development",
        description: "Custom, responsive websites built with modern technologies that load \
fast and rank well on search engines.",
        features: [
            "Responsive Design",
            "SEO Optimization",
            "Fast Loading",
            "CMS Integration",
        ],
        price: "From $2,500",
    },
    Service {
        title: "E-commerce Setup",
        description: "Complete online store solutions that drive sales and provide seamless \
shopping experiences for your customers.",
        features: [
            "Payment Integration",
            "Inventory Management",
            "User Accounts",
            "Analytics Dashboard",
        ],
        price: "From $4,000",
    },
    Service {
        title: "AI Tool Integration",
        description: "Leverage the power of artificial intelligence to automate tasks and \
enhance user experiences on your platform.",
        features: [
            "Chatbot Integration",
            "Content Generation",
            "Data Analysis",
            "Automation Workflows",
        ],
        price: "From $3,000",
    },
    Service {
        title: "SEO & Optimization",
        description: "Improve your search rankings and drive organic traffic with \
comprehensive SEO strategies and technical optimization.",
        features: [
            "Technical SEO Audit",
            "Keyword Research",
            "Content Strategy",
            "Performance Tuning",
        ],
        price: "From $1,500",
    },
    Service {
        title: "Custom Web Solutions",
        description: "Bespoke web applications tailored to your specific business needs, \
from dashboards to complex workflows.",
        features: [
            "Custom Features",
            "API Integration",
            "Database Design",
            "Scalable Architecture",
        ],
        price: "From $5,000",
    },
    Service {
        title: "Consulting",
        description: "Strategic guidance to help you make informed decisions about your \
digital presence and technology stack.",
        features: [
            "Technology Review",
            "Growth Strategy",
            "Best Practices",
            "Ongoing Support",
        ],
        price: "From $150/hr",
    },
];

pub const SERVICES_CTA: &str = "Need something custom? Let's discuss your project.";

// -- Portfolio ---------------------------------------------------------

pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub stats: [(&'static str, &'static str); 2],
}

pub const PROJECTS: [Project; 4] = [
    Project {
        title: "E-Commerce Redesign",
        category: "Web Design & Development",
        description: "Complete overhaul of an online store resulting in 150% increase in \
conversions and 40% reduction in cart abandonment.",
        tags: &["React", "Next.js", "Stripe", "Tailwind"],
        stats: [("conversion", "+150%"), ("traffic", "+80%")],
    },
    Project {
        title: "SaaS Dashboard",
        category: "Web Application",
        description: "Intuitive analytics platform for enterprise clients with real-time \
data visualization and customizable reports.",
        tags: &["TypeScript", "D3.js", "Node.js", "PostgreSQL"],
        stats: [("users", "10K+"), ("satisfaction", "98%")],
    },
    Project {
        title: "Fitness Mobile App",
        category: "Mobile Design",
        description: "Award-winning fitness tracking experience with personalized workout \
plans and social features.",
        tags: &["React Native", "Firebase", "HealthKit"],
        stats: [("downloads", "50K+"), ("rating", "4.9")],
    },
    Project {
        title: "TechSphere Branding",
        category: "Brand Identity",
        description: "Complete visual identity system for a tech startup including logo, \
guidelines, and marketing materials.",
        tags: &["Branding", "Figma", "Illustrator"],
        stats: [("recognition", "+200%"), ("engagement", "+120%")],
    },
];

// -- Testimonials ------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub content: &'static str,
    pub rating: u8,
}

pub const TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        name: "Sarah Johnson",
        role: "CEO",
        company: "TechStart Inc.",
        content: "Exceptional work that exceeded our expectations. The attention to detail \
is remarkable. Our new website has significantly improved our online presence and lead \
generation.",
        rating: 5,
    },
    Testimonial {
        name: "Michael Chen",
        role: "Founder",
        company: "DesignHub",
        content: "A true professional who delivers on time and on budget. The communication \
throughout the project was excellent, and the final result speaks for itself. Highly \
recommended!",
        rating: 5,
    },
    Testimonial {
        name: "Emily Davis",
        role: "Marketing Director",
        company: "GrowthCo",
        content: "Transformed our online presence completely. Our conversions have never \
been higher, and the user feedback has been overwhelmingly positive. A game-changer for \
our business.",
        rating: 5,
    },
    Testimonial {
        name: "David Park",
        role: "CTO",
        company: "InnovateLabs",
        content: "Technical expertise combined with creative vision. A rare find in this \
industry. The codebase is clean, well-documented, and scalable. Exactly what we needed.",
        rating: 5,
    },
];

// -- CTA ---------------------------------------------------------------

pub const CTA_TITLE: &str = "Ready to Start Your Project?";
pub const CTA_TEXT: &str = "Let's create something amazing together. Get in touch and \
let's discuss how I can help bring your vision to life.";
pub const CTA_EMAIL: &str = "hello@harper.studio";

// -- Contact -----------------------------------------------------------

pub const CONTACT_TITLE: &str = "Let's Connect";
pub const CONTACT_TEXT: &str = "Have a project in mind? I'd love to hear about it. Send me \
a message and let's create something amazing together.";
pub const CONTACT_SUCCESS_TITLE: &str = "Message Sent!";
pub const CONTACT_SUCCESS_TEXT: &str =
    "Thank you for reaching out. I'll get back to you within 24 hours.";

pub struct ContactDetail {
    pub label: &'static str,
    pub value: &'static str,
}

pub const CONTACT_DETAILS: [ContactDetail; 3] = [
    ContactDetail {
        label: "Location",
        value: "San Francisco, CA",
    },
    ContactDetail {
        label: "Email",
        value: "hello@harper.studio",
    },
    ContactDetail {
        label: "Phone",
        value: "+1 (415) 555-0134",
    },
];

pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        label: "Twitter",
        href: "https://twitter.com",
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://linkedin.com",
    },
    SocialLink {
        label: "GitHub",
        href: "https://github.com",
    },
    SocialLink {
        label: "Dribbble",
        href: "https://dribbble.com",
    },
];

// -- Footer ------------------------------------------------------------

pub struct FooterColumn {
    pub title: &'static str,
    pub entries: &'static [&'static str],
}

pub const FOOTER_COLUMNS: [FooterColumn; 3] = [
    FooterColumn {
        title: "Pages",
        entries: &["Home", "About", "Services", "Work", "Contact"],
    },
    FooterColumn {
        title: "Services",
        entries: &[
            "Web Development",
            "E-commerce",
            "AI Integration",
            "SEO Optimization",
            "Consulting",
        ],
    },
    FooterColumn {
        title: "Legal",
        entries: &["Privacy Policy", "Terms of Service", "Cookie Policy"],
    },
];

pub const NEWSLETTER_PROMPT: &str = "Get design tips and project updates in your inbox.";
pub const NEWSLETTER_THANKS: &str = "Thanks for subscribing!";
