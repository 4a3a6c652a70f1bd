use crate::planner::AreaRule;

pub fn default_version() -> u32 {
    1
}

pub fn default_max_parallel() -> usize {
    4
}

pub fn default_limit() -> usize {
    500
}

/// Built-in classification table. Order matters: earlier areas win when
/// keywords from several areas match the same issue.
pub fn default_area_rules() -> Vec<AreaRule> {
    vec![
        AreaRule {
            name: "game-engine".to_string(),
            keywords: vec![
                "game state".to_string(),
                "combat".to_string(),
                "stack".to_string(),
                "turn".to_string(),
                "mana".to_string(),
                "spell".to_string(),
                "rules engine".to_string(),
            ],
        },
        AreaRule {
            name: "ui".to_string(),
            keywords: vec![
                "ui".to_string(),
                "layout".to_string(),
                "rendering".to_string(),
                "display".to_string(),
                "visual".to_string(),
                "animation".to_string(),
                "card art".to_string(),
            ],
        },
        AreaRule {
            name: "ai".to_string(),
            keywords: vec![
                "ai".to_string(),
                "opponent".to_string(),
                "coach".to_string(),
                "suggestion".to_string(),
                "provider".to_string(),
                "gemini".to_string(),
                "claude".to_string(),
            ],
        },
        AreaRule {
            name: "networking".to_string(),
            keywords: vec![
                "webrtc".to_string(),
                "p2p".to_string(),
                "signaling".to_string(),
                "connection".to_string(),
                "multiplayer".to_string(),
                "network".to_string(),
            ],
        },
        AreaRule {
            name: "multiplayer".to_string(),
            keywords: vec![
                "lobby".to_string(),
                "chat".to_string(),
                "spectator".to_string(),
                "1v1".to_string(),
                "4-player".to_string(),
                "teams".to_string(),
            ],
        },
        AreaRule {
            name: "testing".to_string(),
            keywords: vec![
                "test".to_string(),
                "e2e".to_string(),
                "unit".to_string(),
                "coverage".to_string(),
            ],
        },
        AreaRule {
            name: "performance".to_string(),
            keywords: vec![
                "performance".to_string(),
                "optimization".to_string(),
                "cache".to_string(),
                "lazy".to_string(),
            ],
        },
        AreaRule {
            name: "accessibility".to_string(),
            keywords: vec![
                "accessibility".to_string(),
                "aria".to_string(),
                "keyboard".to_string(),
                "screen reader".to_string(),
            ],
        },
        AreaRule {
            name: "mobile".to_string(),
            keywords: vec![
                "mobile".to_string(),
                "responsive".to_string(),
                "touch".to_string(),
            ],
        },
        AreaRule {
            name: "pwa".to_string(),
            keywords: vec![
                "pwa".to_string(),
                "service worker".to_string(),
                "offline".to_string(),
                "manifest".to_string(),
            ],
        },
    ]
}
