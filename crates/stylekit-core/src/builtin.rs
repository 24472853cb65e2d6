//! Built-in preset catalogs for the three domains.
//!
//! Each table lists presets in rule order: the keyword list of an earlier
//! preset wins ties against a later one. The first entry of every table is
//! also its fallback.

use crate::catalog::Catalog;
use crate::preset::{Domain, Preset};
use crate::rule::{KeywordRule, RuleTable};

struct PresetDef {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    best_for: &'static str,
    colors: &'static [&'static str],
    background: &'static str,
    elements: &'static [&'static str],
    keywords: &'static [&'static str],
}

// ── Article illustrations ──

const ARTICLE: &[PresetDef] = &[
    PresetDef {
        id: "notion",
        name: "Notion Sketch",
        description: "Hand-drawn line art on a clean page, black strokes with sparse accent fills",
        best_for: "Knowledge sharing, productivity, methods and tutorials",
        colors: &["#1F1F1F", "#FFFFFF", "#F2C94C", "#EB5757"],
        background: "off-white paper",
        elements: &["doodle arrows", "simple stick figures", "checklist boxes"],
        keywords: &["知识", "效率", "方法", "笔记", "学习", "管理", "productivity", "workflow", "tutorial"],
    },
    PresetDef {
        id: "warm",
        name: "Warm Storybook",
        description: "Soft watercolor scenes with rounded shapes and gentle light",
        best_for: "Personal stories, emotions, growth and family life",
        colors: &["#F4A261", "#E76F51", "#FFE8D6", "#6D597A"],
        background: "warm cream gradient",
        elements: &["soft sunlight", "hand-painted textures", "small plants"],
        keywords: &["故事", "情感", "成长", "回忆", "家庭", "温暖", "story", "family", "memory"],
    },
    PresetDef {
        id: "tech",
        name: "Tech Blueprint",
        description: "Isometric diagrams with glowing edges on a dark grid",
        best_for: "Software, AI, engineering and developer topics",
        colors: &["#0B1021", "#00D1FF", "#7C4DFF", "#E0E6ED"],
        background: "dark navy grid",
        elements: &["circuit traces", "isometric blocks", "code brackets"],
        keywords: &["技术", "编程", "代码", "开发", "算法", "人工智能", "ai", "software", "code", "api"],
    },
    PresetDef {
        id: "minimal",
        name: "Minimal Essay",
        description: "Large negative space with a single symbolic object",
        best_for: "Opinion pieces, philosophy and reflective essays",
        colors: &["#FAFAFA", "#222222", "#B0B0B0"],
        background: "flat light grey",
        elements: &["single focal object", "thin rule lines"],
        keywords: &["思考", "哲学", "观点", "反思", "本质", "essay", "opinion", "philosophy"],
    },
    PresetDef {
        id: "playful",
        name: "Playful Comic",
        description: "Bright cartoon panels with bold outlines and exaggerated expressions",
        best_for: "Light-hearted content, games, parenting and humor",
        colors: &["#FFD23F", "#EE4266", "#3BCEAC", "#540D6E"],
        background: "halftone dots",
        elements: &["speech bubbles", "motion lines", "stars"],
        keywords: &["有趣", "趣味", "游戏", "漫画", "儿童", "搞笑", "fun", "game", "kids", "comic"],
    },
    PresetDef {
        id: "nature",
        name: "Field Notes",
        description: "Botanical and landscape illustration in muted greens and earth tones",
        best_for: "Travel, environment, outdoors and wellbeing",
        colors: &["#2D6A4F", "#95D5B2", "#D8F3DC", "#8D6E63"],
        background: "textured kraft paper",
        elements: &["leaves", "mountain outlines", "compass rose"],
        keywords: &["自然", "环境", "旅行", "户外", "植物", "健康", "nature", "travel", "outdoor"],
    },
    PresetDef {
        id: "business",
        name: "Boardroom Flat",
        description: "Corporate flat illustration with charts, people and clean geometry",
        best_for: "Business strategy, markets, startups and finance",
        colors: &["#1D3557", "#457B9D", "#A8DADC", "#E63946"],
        background: "white with light blue panels",
        elements: &["bar charts", "upward arrows", "handshake icons"],
        keywords: &["商业", "市场", "创业", "投资", "策略", "营销", "business", "startup", "market", "finance"],
    },
    PresetDef {
        id: "retro",
        name: "Retro Print",
        description: "Risograph-style print with grain, limited palette and offset misregistration",
        best_for: "History, culture, classics and nostalgia",
        colors: &["#D62828", "#003049", "#FCBF49", "#EAE2B7"],
        background: "grainy newsprint",
        elements: &["halftone shading", "vintage badges", "ornamental borders"],
        keywords: &["历史", "复古", "怀旧", "经典", "文化", "history", "vintage", "classic", "retro"],
    },
];

// ── Infographics ──

const INFOGRAPHIC: &[PresetDef] = &[
    PresetDef {
        id: "flat",
        name: "Flat Data",
        description: "Flat icons and clean charts on a neutral canvas",
        best_for: "Statistics, survey results and general data summaries",
        colors: &["#264653", "#2A9D8F", "#E9C46A", "#F4A261"],
        background: "solid light neutral",
        elements: &["pie charts", "bar charts", "icon rows"],
        keywords: &["数据", "统计", "比例", "图表", "调查", "data", "chart", "percent", "survey"],
    },
    PresetDef {
        id: "timeline",
        name: "Timeline Ribbon",
        description: "Horizontal ribbon with milestone markers and dates",
        best_for: "Histories, roadmaps and evolution over time",
        colors: &["#3D405B", "#E07A5F", "#F2CC8F", "#81B29A"],
        background: "soft paper texture",
        elements: &["milestone pins", "date labels", "connecting ribbon"],
        keywords: &["历史", "发展", "演变", "阶段", "年代", "里程碑", "timeline", "history", "roadmap"],
    },
    PresetDef {
        id: "process",
        name: "Step Flow",
        description: "Numbered steps linked by arrows, top to bottom or left to right",
        best_for: "How-tos, workflows and procedures",
        colors: &["#118AB2", "#06D6A0", "#FFD166", "#073B4C"],
        background: "white with subtle grid",
        elements: &["numbered circles", "flow arrows", "step cards"],
        keywords: &["流程", "步骤", "如何", "教程", "操作", "step", "process", "how to", "guide"],
    },
    PresetDef {
        id: "comparison",
        name: "Split Compare",
        description: "Two or more columns contrasted side by side with matching rows",
        best_for: "Versus pieces, pros and cons, option comparisons",
        colors: &["#EF476F", "#118AB2", "#FFFFFF", "#333333"],
        background: "split two-tone panels",
        elements: &["vs badge", "check and cross marks", "mirrored columns"],
        keywords: &["对比", "比较", "区别", "优缺点", "选择", "vs", "versus", "compare", "pros"],
    },
    PresetDef {
        id: "hierarchy",
        name: "Structure Tree",
        description: "Nested boxes or a tree of nodes showing parts of a whole",
        best_for: "Frameworks, org charts, taxonomies and architectures",
        colors: &["#5F0F40", "#9A031E", "#FB8B24", "#0F4C5C"],
        background: "light slate",
        elements: &["tree connectors", "nested cards", "layer bands"],
        keywords: &["结构", "组织", "层级", "分类", "架构", "体系", "framework", "structure", "hierarchy"],
    },
    PresetDef {
        id: "map",
        name: "Geo Map",
        description: "Simplified map shapes with pinned callouts and regional shading",
        best_for: "Regional data, global trends and location stories",
        colors: &["#023E8A", "#48CAE4", "#ADE8F4", "#F77F00"],
        background: "ocean blue",
        elements: &["map pins", "region shading", "legend box"],
        keywords: &["地区", "地图", "全球", "国家", "城市", "分布", "region", "global", "map", "country"],
    },
];

// ── Social cards ──

const SOCIAL_CARD: &[PresetDef] = &[
    PresetDef {
        id: "bold",
        name: "Bold Headline",
        description: "Oversized type on a saturated block with one accent shape",
        best_for: "Tips, lists and must-read posts",
        colors: &["#FF006E", "#FFBE0B", "#000000", "#FFFFFF"],
        background: "saturated solid block",
        elements: &["oversized numerals", "underline swoosh"],
        keywords: &["干货", "技巧", "清单", "必看", "合集", "tips", "list", "top", "must"],
    },
    PresetDef {
        id: "quote",
        name: "Quote Card",
        description: "Centered serif quote with attribution and generous margins",
        best_for: "Quotes, sayings and short insights",
        colors: &["#F8F1E5", "#2B2D42", "#8D99AE"],
        background: "linen texture",
        elements: &["large quotation marks", "thin divider"],
        keywords: &["名言", "金句", "语录", "感悟", "quote", "said", "saying"],
    },
    PresetDef {
        id: "launch",
        name: "Launch Banner",
        description: "Dynamic diagonal layout with a product hero and call to action",
        best_for: "Announcements, launches, releases and events",
        colors: &["#7209B7", "#3A0CA3", "#4CC9F0", "#F72585"],
        background: "diagonal gradient burst",
        elements: &["confetti", "badge ribbon", "call-to-action button"],
        keywords: &["发布", "上线", "公告", "活动", "新品", "launch", "announce", "release", "event"],
    },
    PresetDef {
        id: "gradient",
        name: "Future Gradient",
        description: "Glassmorphism panels floating over a mesh gradient",
        best_for: "Tech products, AI and forward-looking themes",
        colors: &["#8338EC", "#3A86FF", "#00F5D4", "#F1F1F1"],
        background: "mesh gradient",
        elements: &["frosted glass cards", "soft glow orbs"],
        keywords: &["科技", "未来", "产品", "智能", "ai", "future", "product", "tech"],
    },
    PresetDef {
        id: "handwritten",
        name: "Diary Doodle",
        description: "Handwritten notes and stickers on a notebook page",
        best_for: "Daily life, moods and casual sharing",
        colors: &["#FFAFCC", "#BDE0FE", "#A2D2FF", "#6B705C"],
        background: "dotted notebook page",
        elements: &["washi tape", "stickers", "hand lettering"],
        keywords: &["日常", "生活", "心情", "分享", "日记", "daily", "diary", "vlog"],
    },
    PresetDef {
        id: "data-card",
        name: "Stat Card",
        description: "A single headline number with a compact supporting chart",
        best_for: "Reports, growth figures and key metrics",
        colors: &["#0A9396", "#94D2BD", "#001219", "#EE9B00"],
        background: "dark teal",
        elements: &["big number", "sparkline", "delta arrow"],
        keywords: &["数据", "报告", "增长", "百分比", "指标", "report", "stats", "growth", "metric"],
    },
];

/// Built-in catalog for `domain`.
pub fn catalog(domain: Domain) -> Catalog {
    let defs = match domain {
        Domain::Article => ARTICLE,
        Domain::Infographic => INFOGRAPHIC,
        Domain::SocialCard => SOCIAL_CARD,
    };
    build(domain, defs)
}

/// All three built-in catalogs, in [`Domain::ALL`] order.
pub fn all() -> Vec<Catalog> {
    Domain::ALL.into_iter().map(catalog).collect()
}

fn build(domain: Domain, defs: &[PresetDef]) -> Catalog {
    let presets = defs.iter().map(PresetDef::to_preset).collect();
    let rules: RuleTable = defs
        .iter()
        .map(|d| KeywordRule::new(d.id, d.keywords.iter().copied()))
        .collect();

    Catalog {
        domain,
        fallback_id: defs.first().map(|d| d.id.to_string()).unwrap_or_default(),
        presets,
        rules,
    }
}

impl PresetDef {
    fn to_preset(&self) -> Preset {
        Preset {
            id: self.id.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            best_for: self.best_for.to_string(),
            colors: self.colors.iter().map(|s| s.to_string()).collect(),
            background: self.background.to_string(),
            elements: self.elements.iter().map(|s| s.to_string()).collect(),
        }
    }
}
