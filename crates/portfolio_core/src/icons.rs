//! Skill name → icon mapping.
//!
//! One explicit table plus a single default branch. Names are compared
//! ignoring ASCII case.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillIcon {
    Boxes,
    Cpu,
    Layers,
    Code,
    Braces,
    PenTool,
    Globe,
    Glasses,
    Gamepad,
    FileCode,
    Palette,
    Users,
    Cog,
    Zap,
}

pub const DEFAULT_SKILL_ICON: SkillIcon = SkillIcon::Code;

pub const SKILL_ICON_TABLE: &[(&str, SkillIcon)] = &[
    ("Unity3D", SkillIcon::Boxes),
    ("Unreal Engine", SkillIcon::Cpu),
    ("WebXR", SkillIcon::Layers),
    ("React", SkillIcon::Code),
    ("Three.js", SkillIcon::Braces),
    ("UX Design", SkillIcon::PenTool),
    ("Oculus SDK", SkillIcon::Glasses),
    ("SteamVR", SkillIcon::Gamepad),
    ("C#", SkillIcon::Code),
    ("JavaScript", SkillIcon::Braces),
    ("C++", SkillIcon::FileCode),
    ("Python", SkillIcon::Code),
    ("Blender", SkillIcon::Layers),
    ("Adobe Creative Suite", SkillIcon::Palette),
    ("Shader Development", SkillIcon::PenTool),
    ("Interaction Design", SkillIcon::PenTool),
    ("3D Modeling", SkillIcon::Layers),
    ("Performance Optimization", SkillIcon::Zap),
    ("User Testing", SkillIcon::Users),
    ("Cross-platform", SkillIcon::Globe),
    ("Spatial Audio", SkillIcon::Cog),
];

impl SkillIcon {
    pub fn for_skill(name: &str) -> Self {
        let name = name.trim();
        SKILL_ICON_TABLE
            .iter()
            .find(|(skill, _)| skill.eq_ignore_ascii_case(name))
            .map_or(DEFAULT_SKILL_ICON, |(_, icon)| *icon)
    }

    /// Short glyph used by the terminal and browser dashboards.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Boxes => "▣",
            Self::Cpu => "▦",
            Self::Layers => "≋",
            Self::Code => "‹›",
            Self::Braces => "{}",
            Self::PenTool => "✎",
            Self::Globe => "◍",
            Self::Glasses => "◎",
            Self::Gamepad => "◆",
            Self::FileCode => "▤",
            Self::Palette => "◐",
            Self::Users => "☺",
            Self::Cog => "✲",
            Self::Zap => "ϟ",
        }
    }
}
