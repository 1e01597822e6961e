//! Skill proficiency radar: axis layout and interaction contract.
//!
//! Drawing and hit-testing belong to the front end's chart primitive; this
//! module supplies axis values/labels and turns "axis `i` clicked" or
//! "axis `i` hovered" into domain events.

use std::f64::consts::{FRAC_PI_2, TAU};
use std::fmt;

use crate::catalog::ProjectId;
use crate::error::RadarError;
use crate::navigation::{gallery_link, Navigator};
use crate::skills::SkillStat;

pub const DEFAULT_MAX_VALUE: f64 = 100.0;
pub const TICK_STEP: f64 = 20.0;

pub type SelectHandler = Box<dyn FnMut(&SkillStat, &[ProjectId])>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarAxis<'a> {
    pub index: usize,
    pub label: &'a str,
    pub value: u8,
    /// `value / max_value`, clamped to `[0, 1]` for plotting.
    pub ratio: f64,
    /// Radians, y-up; axis 0 points straight up and axes run clockwise.
    pub angle: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RadarClick {
    /// Out-of-range axis, or a skill with no projects.
    Ignored,
    /// The selection callback ran.
    Selected { index: usize },
    /// No callback: the chart navigated to the gallery deep link.
    Navigated(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Default,
    Outline,
}

pub struct RadarChart {
    title: String,
    skills: Vec<SkillStat>,
    max_value: f64,
    emphasized: Option<usize>,
    on_select: Option<SelectHandler>,
}

impl fmt::Debug for RadarChart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RadarChart")
            .field("title", &self.title)
            .field("skills", &self.skills)
            .field("max_value", &self.max_value)
            .field("emphasized", &self.emphasized)
            .field("on_select", &self.on_select.is_some())
            .finish()
    }
}

impl RadarChart {
    pub fn new(
        title: impl Into<String>,
        skills: Vec<SkillStat>,
        max_value: Option<f64>,
    ) -> Result<Self, RadarError> {
        let title = title.into();
        if skills.is_empty() {
            return Err(RadarError::NoSkills(title));
        }

        let max_value = max_value.unwrap_or(DEFAULT_MAX_VALUE);
        if !max_value.is_finite() || max_value <= 0.0 {
            return Err(RadarError::InvalidMaxValue(max_value));
        }

        Ok(Self {
            title,
            skills,
            max_value,
            emphasized: None,
            on_select: None,
        })
    }

    /// Routes clicks to `handler` instead of the default gallery navigation.
    #[must_use]
    pub fn with_on_select(
        mut self,
        handler: impl FnMut(&SkillStat, &[ProjectId]) + 'static,
    ) -> Self {
        self.on_select = Some(Box::new(handler));
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn skills(&self) -> &[SkillStat] {
        &self.skills
    }

    pub fn skill(&self, index: usize) -> Option<&SkillStat> {
        self.skills.get(index)
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub const fn max_value(&self) -> f64 {
        self.max_value
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn angle(&self, index: usize) -> f64 {
        FRAC_PI_2 - TAU * (index as f64) / (self.skills.len() as f64)
    }

    pub fn axes(&self) -> Vec<RadarAxis<'_>> {
        self.skills
            .iter()
            .enumerate()
            .map(|(index, skill)| RadarAxis {
                index,
                label: skill.name(),
                value: skill.value(),
                ratio: (f64::from(skill.value()) / self.max_value).clamp(0.0, 1.0),
                angle: self.angle(index),
            })
            .collect()
    }

    /// Offset of axis `index`'s data point from the centre for a chart of `radius`.
    pub fn vertex(&self, index: usize, radius: f64) -> Option<(f64, f64)> {
        let skill = self.skills.get(index)?;
        let ratio = (f64::from(skill.value()) / self.max_value).clamp(0.0, 1.0);
        let angle = self.angle(index);
        Some((angle.cos() * radius * ratio, angle.sin() * radius * ratio))
    }

    /// Grid ring values: every [`TICK_STEP`] up to and including the max.
    pub fn ticks(&self) -> Vec<f64> {
        let mut ticks = Vec::new();
        let mut tick = TICK_STEP;
        while tick < self.max_value {
            ticks.push(tick);
            tick += TICK_STEP;
        }
        ticks.push(self.max_value);
        ticks
    }

    /// Click on axis point `index` or its label.
    pub fn click(&mut self, index: usize, navigator: &mut dyn Navigator) -> RadarClick {
        let Some(skill) = self.skills.get(index) else {
            return RadarClick::Ignored;
        };

        let Some(first) = skill.project_ids().first() else {
            log::debug!("radar click on `{}` ignored: no projects", skill.name());
            return RadarClick::Ignored;
        };

        if let Some(handler) = self.on_select.as_mut() {
            handler(skill, skill.project_ids());
            return RadarClick::Selected { index };
        }

        let link = gallery_link(first);
        navigator.navigate(&link);
        RadarClick::Navigated(link)
    }

    /// Pointer over axis `index`, or `None` when it left every point.
    pub fn hover(&mut self, index: Option<usize>) {
        self.emphasized = index.filter(|index| *index < self.skills.len());
    }

    pub const fn emphasized(&self) -> Option<usize> {
        self.emphasized
    }

    pub fn badge_variant(&self, index: usize) -> BadgeVariant {
        if self.emphasized == Some(index) {
            BadgeVariant::Default
        } else {
            BadgeVariant::Outline
        }
    }

    pub fn tooltip(&self, index: usize) -> Vec<String> {
        let Some(skill) = self.skills.get(index) else {
            return Vec::new();
        };

        let mut lines = vec![format!("Proficiency: {}%", skill.value())];
        if skill.has_projects() {
            lines.push("Click to see related projects".to_string());
        }
        lines
    }
}
