// Static catalogs - the fixed data the UI renders
//
// Mood options, wellness factors, navigation items, the resource library and
// the mock dashboard week are all hardcoded literals. The UI never mutates
// these; it only renders what is in the arrays.

/// A selectable mood on the check-in form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodOption {
    /// Mood value, 1 (worst) to 5 (best)
    pub value: u8,
    pub emoji: &'static str,
    pub label: &'static str,
}

/// Mood options in display order (best first, matching the form layout)
pub const MOOD_OPTIONS: [MoodOption; 5] = [
    MoodOption {
        value: 5,
        emoji: "😄",
        label: "Excellent",
    },
    MoodOption {
        value: 4,
        emoji: "😊",
        label: "Good",
    },
    MoodOption {
        value: 3,
        emoji: "😐",
        label: "Okay",
    },
    MoodOption {
        value: 2,
        emoji: "😟",
        label: "Low",
    },
    MoodOption {
        value: 1,
        emoji: "😢",
        label: "Poor",
    },
];

/// Look up the emoji for a mood value (1-5). Out-of-range falls back to "😐".
pub fn mood_emoji(value: u8) -> &'static str {
    MOOD_OPTIONS
        .iter()
        .find(|m| m.value == value)
        .map(|m| m.emoji)
        .unwrap_or("😐")
}

/// Look up the label for a mood value (1-5). Out-of-range falls back to "Okay".
pub fn mood_label(value: u8) -> &'static str {
    MOOD_OPTIONS
        .iter()
        .find(|m| m.value == value)
        .map(|m| m.label)
        .unwrap_or("Okay")
}

/// The seven wellness factors a check-in can be tagged with
pub const WELLNESS_FACTORS: [&str; 7] = [
    "Sleep Quality",
    "Stress Level",
    "Social Connection",
    "Physical Activity",
    "Academic Pressure",
    "Focus & Concentration",
    "Emotional Stability",
];

/// A top-level navigation entry
#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    /// Section id, matched by `Section::from_id`
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

/// The four sections of the app, in navigation order
pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        id: "check-in",
        label: "Daily Check-in",
        icon: "📝",
        description: "Track your daily wellness",
    },
    NavItem {
        id: "dashboard",
        label: "Dashboard",
        icon: "📊",
        description: "View your wellness insights",
    },
    NavItem {
        id: "resources",
        label: "Resources",
        icon: "🛠️",
        description: "Wellness tools & guides",
    },
    NavItem {
        id: "profile",
        label: "Profile",
        icon: "👤",
        description: "Manage your account",
    },
];

// ─── Resource library ────────────────────────────────────────────────────────

/// Resource difficulty rating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

/// Resource media type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Audio,
    Video,
    Article,
    Interactive,
    Guide,
    Checklist,
}

impl ResourceKind {
    pub fn icon(&self) -> &'static str {
        match self {
            ResourceKind::Audio => "🎧",
            ResourceKind::Video => "📹",
            ResourceKind::Article => "📖",
            ResourceKind::Interactive => "🎯",
            ResourceKind::Guide => "📋",
            ResourceKind::Checklist => "✅",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Audio => "Audio",
            ResourceKind::Video => "Video",
            ResourceKind::Article => "Article",
            ResourceKind::Interactive => "Interactive",
            ResourceKind::Guide => "Guide",
            ResourceKind::Checklist => "Checklist",
        }
    }
}

/// A single entry in the resource library
#[derive(Debug, Clone, Copy)]
pub struct Resource {
    pub title: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub difficulty: Difficulty,
    pub kind: ResourceKind,
    pub tags: &'static [&'static str],
}

/// A tab in the resource library
#[derive(Debug, Clone, Copy)]
pub struct ResourceCategory {
    pub title: &'static str,
    pub resources: &'static [Resource],
}

pub const RESOURCE_CATEGORIES: [ResourceCategory; 4] = [
    ResourceCategory {
        title: "Coping Skills",
        resources: &[
            Resource {
                title: "5-Minute Breathing Exercise",
                description: "Quick stress relief through guided breathing",
                duration: "5 min",
                difficulty: Difficulty::Beginner,
                kind: ResourceKind::Audio,
                tags: &["Stress", "Anxiety", "Quick Relief"],
            },
            Resource {
                title: "Progressive Muscle Relaxation",
                description: "Full-body relaxation technique for deep calm",
                duration: "15 min",
                difficulty: Difficulty::Beginner,
                kind: ResourceKind::Video,
                tags: &["Stress", "Sleep", "Relaxation"],
            },
            Resource {
                title: "Mindful Study Breaks",
                description: "Techniques to reset your mind during study sessions",
                duration: "3 min",
                difficulty: Difficulty::Beginner,
                kind: ResourceKind::Article,
                tags: &["Focus", "Study", "Productivity"],
            },
        ],
    },
    ResourceCategory {
        title: "Mindfulness",
        resources: &[
            Resource {
                title: "Daily Gratitude Practice",
                description: "Build resilience through gratitude journaling",
                duration: "10 min",
                difficulty: Difficulty::Beginner,
                kind: ResourceKind::Interactive,
                tags: &["Gratitude", "Mood", "Resilience"],
            },
            Resource {
                title: "Body Scan Meditation",
                description: "Connect with your body and reduce tension",
                duration: "20 min",
                difficulty: Difficulty::Intermediate,
                kind: ResourceKind::Audio,
                tags: &["Meditation", "Awareness", "Relaxation"],
            },
            Resource {
                title: "Mindful Walking",
                description: "Transform daily walks into mindfulness practice",
                duration: "Variable",
                difficulty: Difficulty::Beginner,
                kind: ResourceKind::Guide,
                tags: &["Movement", "Mindfulness", "Nature"],
            },
        ],
    },
    ResourceCategory {
        title: "Sleep",
        resources: &[
            Resource {
                title: "Sleep Hygiene Checklist",
                description: "Optimize your environment for better sleep",
                duration: "2 min",
                difficulty: Difficulty::Beginner,
                kind: ResourceKind::Checklist,
                tags: &["Sleep", "Environment", "Habits"],
            },
            Resource {
                title: "Wind-Down Routine",
                description: "Create a calming pre-sleep ritual",
                duration: "30 min",
                difficulty: Difficulty::Beginner,
                kind: ResourceKind::Guide,
                tags: &["Sleep", "Routine", "Relaxation"],
            },
            Resource {
                title: "Sleep Stories",
                description: "Calming narratives to help you drift off",
                duration: "25 min",
                difficulty: Difficulty::Beginner,
                kind: ResourceKind::Audio,
                tags: &["Sleep", "Stories", "Relaxation"],
            },
        ],
    },
    ResourceCategory {
        title: "Social Support",
        resources: &[
            Resource {
                title: "Building Support Networks",
                description: "How to create meaningful connections in college",
                duration: "8 min",
                difficulty: Difficulty::Beginner,
                kind: ResourceKind::Article,
                tags: &["Connection", "Friends", "Support"],
            },
            Resource {
                title: "Healthy Boundaries",
                description: "Setting limits while maintaining relationships",
                duration: "12 min",
                difficulty: Difficulty::Intermediate,
                kind: ResourceKind::Video,
                tags: &["Boundaries", "Relationships", "Self-care"],
            },
            Resource {
                title: "Social Anxiety Toolkit",
                description: "Practical strategies for social situations",
                duration: "15 min",
                difficulty: Difficulty::Intermediate,
                kind: ResourceKind::Interactive,
                tags: &["Anxiety", "Social", "Confidence"],
            },
        ],
    },
];

/// Always-available crisis support entry
#[derive(Debug, Clone, Copy)]
pub struct EmergencyResource {
    pub title: &'static str,
    pub description: &'static str,
    pub contact: &'static str,
    pub kind: &'static str,
}

pub const EMERGENCY_RESOURCES: [EmergencyResource; 3] = [
    EmergencyResource {
        title: "Crisis Text Line",
        description: "24/7 support via text message",
        contact: "Text HOME to 741741",
        kind: "Immediate",
    },
    EmergencyResource {
        title: "National Suicide Prevention Lifeline",
        description: "24/7 phone and chat support",
        contact: "988 or chat online",
        kind: "Immediate",
    },
    EmergencyResource {
        title: "Campus Counseling Center",
        description: "Professional counseling services",
        contact: "Visit student services",
        kind: "Professional",
    },
];

/// One-tap wellness shortcut shown below the resource library
#[derive(Debug, Clone, Copy)]
pub struct QuickAction {
    pub icon: &'static str,
    pub label: &'static str,
}

pub const QUICK_ACTIONS: [QuickAction; 4] = [
    QuickAction {
        icon: "🧘",
        label: "Quick Calm",
    },
    QuickAction {
        icon: "💤",
        label: "Sleep Help",
    },
    QuickAction {
        icon: "⚡",
        label: "Energy Boost",
    },
    QuickAction {
        icon: "🤝",
        label: "Connect",
    },
];

// ─── Dashboard mock data ─────────────────────────────────────────────────────

/// One day of the mock dashboard week
#[derive(Debug, Clone, Copy)]
pub struct DayRecord {
    pub day: &'static str,
    /// Mood 1-5
    pub mood: u8,
    /// Wellness index 0-100
    pub wellness: u8,
}

pub const MOCK_WEEK: [DayRecord; 7] = [
    DayRecord {
        day: "Mon",
        mood: 4,
        wellness: 75,
    },
    DayRecord {
        day: "Tue",
        mood: 3,
        wellness: 65,
    },
    DayRecord {
        day: "Wed",
        mood: 5,
        wellness: 85,
    },
    DayRecord {
        day: "Thu",
        mood: 2,
        wellness: 45,
    },
    DayRecord {
        day: "Fri",
        mood: 4,
        wellness: 80,
    },
    DayRecord {
        day: "Sat",
        mood: 5,
        wellness: 90,
    },
    DayRecord {
        day: "Sun",
        mood: 4,
        wellness: 78,
    },
];

/// Direction of a wellness metric over the week
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "↗",
            Trend::Down => "↘",
            Trend::Stable => "→",
        }
    }
}

/// Per-category wellness score shown on the dashboard
#[derive(Debug, Clone, Copy)]
pub struct WellnessMetric {
    pub category: &'static str,
    /// 0-100
    pub score: u8,
    pub trend: Trend,
}

pub const WELLNESS_METRICS: [WellnessMetric; 4] = [
    WellnessMetric {
        category: "Sleep Quality",
        score: 78,
        trend: Trend::Up,
    },
    WellnessMetric {
        category: "Stress Management",
        score: 65,
        trend: Trend::Down,
    },
    WellnessMetric {
        category: "Social Connection",
        score: 82,
        trend: Trend::Up,
    },
    WellnessMetric {
        category: "Physical Activity",
        score: 55,
        trend: Trend::Stable,
    },
];

/// Kind of dashboard insight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightKind {
    Positive,
    Concern,
    Achievement,
}

impl InsightKind {
    pub fn icon(&self) -> &'static str {
        match self {
            InsightKind::Positive => "✨",
            InsightKind::Concern => "⚠️",
            InsightKind::Achievement => "🎉",
        }
    }
}

/// A dashboard insight entry
#[derive(Debug, Clone, Copy)]
pub struct Insight {
    pub kind: InsightKind,
    pub title: &'static str,
    pub description: &'static str,
    pub time: &'static str,
}

pub const INSIGHTS: [Insight; 3] = [
    Insight {
        kind: InsightKind::Positive,
        title: "Improved Sleep Pattern",
        description: "Your sleep quality has improved by 15% this week",
        time: "2 hours ago",
    },
    Insight {
        kind: InsightKind::Concern,
        title: "Elevated Stress Levels",
        description: "Consider trying breathing exercises before your morning classes",
        time: "1 day ago",
    },
    Insight {
        kind: InsightKind::Achievement,
        title: "Consistency Streak",
        description: "7 days of regular wellness check-ins! Keep it up!",
        time: "3 days ago",
    },
];

/// Average wellness index across the mock week, rounded
pub fn weekly_average() -> u8 {
    let sum: u32 = MOCK_WEEK.iter().map(|d| d.wellness as u32).sum();
    (sum as f64 / MOCK_WEEK.len() as f64).round() as u8
}

/// Mood of the most recent mock day
pub fn current_mood() -> u8 {
    MOCK_WEEK.last().map(|d| d.mood).unwrap_or(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mood_options_cover_one_to_five() {
        let mut values: Vec<u8> = MOOD_OPTIONS.iter().map(|m| m.value).collect();
        values.sort_unstable();
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn mood_lookup_falls_back_for_unknown() {
        assert_eq!(mood_emoji(4), "😊");
        assert_eq!(mood_label(4), "Good");
        assert_eq!(mood_emoji(0), "😐");
        assert_eq!(mood_label(42), "Okay");
    }

    #[test]
    fn factor_catalog_has_seven_unique_names() {
        let mut names: Vec<&str> = WELLNESS_FACTORS.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 7);
    }

    #[test]
    fn nav_ids_are_unique() {
        let mut ids: Vec<&str> = NAV_ITEMS.iter().map(|n| n.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn resource_library_shape() {
        assert_eq!(RESOURCE_CATEGORIES.len(), 4);
        for category in &RESOURCE_CATEGORIES {
            assert_eq!(category.resources.len(), 3);
            for resource in category.resources {
                assert!(!resource.tags.is_empty());
            }
        }
    }

    #[test]
    fn mock_week_in_range() {
        for day in &MOCK_WEEK {
            assert!((1..=5).contains(&day.mood));
            assert!(day.wellness <= 100);
        }
        assert_eq!(weekly_average(), 74);
        assert_eq!(current_mood(), 4);
    }
}
