// Fixed page content: every section renders 1:1 from these records, in
// array order. Order is meaningful: it drives the stagger sequence.

/// Icon glyphs addressable by key; the stylesheet supplies the drawings
/// under `.icon-<key>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Zap,
    Cpu,
    Layers,
    Users,
    ChevronRight,
    Linkedin,
    Mail,
    ArrowUpRight,
    Monitor,
    Lightbulb,
    Layout,
    Menu,
    Close,
}

impl Icon {
    pub fn key(self) -> &'static str {
        match self {
            Icon::Zap => "zap",
            Icon::Cpu => "cpu",
            Icon::Layers => "layers",
            Icon::Users => "users",
            Icon::ChevronRight => "chevron-right",
            Icon::Linkedin => "linkedin",
            Icon::Mail => "mail",
            Icon::ArrowUpRight => "arrow-up-right",
            Icon::Monitor => "monitor",
            Icon::Lightbulb => "lightbulb",
            Icon::Layout => "layout",
            Icon::Menu => "menu",
            Icon::Close => "close",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Role {
    pub icon: Icon,
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Service {
    pub icon: Icon,
    pub title: &'static str,
    pub tags: &'static [&'static str],
    pub desc: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Strength {
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct ContactLink {
    pub icon: Icon,
    pub label: &'static str,
    pub href: &'static str,
}

// Brand mark
pub const BRAND_GLYPH: &str = "D";
pub const BRAND_NAME: &str = "DAIN";
pub const BRAND_ACCENT: &str = ".AI";

// Hero copy
pub const HERO_BADGE: &str = "Next-Gen AI Transformation Expert";
pub const HERO_TITLE_TOP: &str = "DRIVING THE";
pub const HERO_TITLE_ACCENT: &str = "FUTURE OF AI";
pub const HERO_INTRO_LEAD: &str = "안녕하세요, 인공지능 교육 전문가 ";
pub const HERO_INTRO_NAME: &str = "Dain";
pub const HERO_INTRO_TAIL: &str =
    "입니다. 복잡한 기술을 실무의 언어로 변환하여, 조직의 성장을 가속화하는 AI 도입 전략을 제시합니다.";
pub const HERO_CTA_PRIMARY: &str = "LET'S COLLABORATE";
pub const HERO_CTA_SECONDARY: &str = "EXPLORE SERVICES";
pub const HERO_CODE_SNIPPET: &str = r#"{
  "expert": "Dain",
  "focus": "AI Transformation",
  "status": "Ready to Innovate",
  "tech_stack": ["LLM", "RAG", "NoCode"]
}"#;

// Section titles
pub const ABOUT_KICKER: &str = "Visionary Consultant";
pub const ABOUT_TITLE: &str = "The Architect of AI";
pub const SERVICES_KICKER: &str = "Core Solutions";
pub const SERVICES_TITLE: &str = "Our Services";
pub const STRENGTHS_KICKER: &str = "Why Choose Dain";
pub const STRENGTHS_TITLE: &str = "Unmatched Value";

pub const ROLES: [Role; 3] = [
    Role {
        icon: Icon::Zap,
        title: "AI 실무 교육 전문가",
        desc: "제미나이, 챗GPT 등 핵심 AI 툴을 활용한 실질적인 결과물을 도출하는 핸즈온 강의를 수행합니다.",
    },
    Role {
        icon: Icon::Layers,
        title: "도입 전략 수석 컨설턴트",
        desc: "조직 내 업무 효율 극대화를 위한 최적화된 AI 워크플로우를 설계하고 가이드를 수립합니다.",
    },
    Role {
        icon: Icon::Users,
        title: "콘텐츠 디렉터",
        desc: "급변하는 AI 생태계 속에서 최신 기술 동향을 분석하여 실무에 바로 적용 가능한 사례를 전파합니다.",
    },
];

pub const SERVICES: [Service; 4] = [
    Service {
        icon: Icon::Monitor,
        title: "생성형 AI 실무 워크숍",
        tags: &["Prompt Engineering", "Tool Expertise"],
        desc: "단순 체험을 넘어 실무 역량을 강화하는 맞춤형 프롬프트 설계 교육을 제공합니다.",
    },
    Service {
        icon: Icon::Cpu,
        title: "AI 기반 업무 자동화 컨설팅",
        tags: &["No-Code", "Efficiency"],
        desc: "노코드 툴과 AI를 결합하여 반복적인 업무를 자동화하는 스마트 워크플레이스를 구축합니다.",
    },
    Service {
        icon: Icon::Lightbulb,
        title: "AI 리터러시 강연",
        tags: &["Futuristic", "Insights"],
        desc: "비전공자도 쉽게 이해할 수 있는 AI 기술의 메커니즘과 미래 트렌드를 대중의 언어로 전달합니다.",
    },
    Service {
        icon: Icon::Layout,
        title: "기업 맞춤형 AI 가이드라인",
        tags: &["Strategy", "Governance"],
        desc: "효율적이면서도 안전한 AI 도입을 위한 사내 정책 및 활용 가이드라인을 수립합니다.",
    },
];

pub const STRENGTHS: [Strength; 4] = [
    Strength {
        title: "기술의 일상화",
        desc: "복잡한 기술을 누구나 바로 쓸 수 있는 실무 언어로 변환합니다.",
    },
    Strength {
        title: "실전형 커리큘럼",
        desc: "이론을 넘어 즉각적인 결과물을 만들어내는 핸즈온 중심 교육입니다.",
    },
    Strength {
        title: "트렌드 분석력",
        desc: "급변하는 AI 생태계에서 핵심 도구를 선별하는 통찰력을 제공합니다.",
    },
    Strength {
        title: "솔루션 중심 접근",
        desc: "현장에 즉시 도입 가능한 실용적인 해결책을 제시합니다.",
    },
];

pub const SATISFACTION_FIGURE: &str = "99%";
pub const SATISFACTION_LABEL: &str = "SATISFACTION RATE";
pub const SATISFACTION_METER_BARS: usize = 5;

// Contact / CTA copy
pub const CTA_TITLE_LEAD: &str = "READY TO ";
pub const CTA_TITLE_ACCENT: &str = "TRANSFORM?";
pub const CTA_BODY_TOP: &str = "당신의 비즈니스에 인공지능의 날개를 달아보세요.";
pub const CTA_BODY_BOTTOM: &str = "맞춤형 컨설팅과 교육으로 앞서가는 미래를 만듭니다.";

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        label: "About",
        anchor: "#about",
    },
    NavLink {
        label: "Services",
        anchor: "#services",
    },
    NavLink {
        label: "Strengths",
        anchor: "#strengths",
    },
    NavLink {
        label: "Contact",
        anchor: "#contact",
    },
];

pub const CONTACT_LINKS: [ContactLink; 2] = [
    ContactLink {
        icon: Icon::Mail,
        label: "DAIN@AI.COM",
        href: "mailto:dain@example.com",
    },
    ContactLink {
        icon: Icon::Linkedin,
        label: "LINKEDIN.COM/IN/DAIN",
        href: "https://linkedin.com",
    },
];

pub const FOOTER_LINKS: [&str; 3] = ["Privacy", "Terms", "Career"];
pub const FOOTER_COPYRIGHT: &str = "© 2024 DAIN AI TRANSFORMATION. ALL RIGHTS RESERVED.";
