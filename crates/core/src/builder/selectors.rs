use super::{ClauseSchema, KeySpec, ValueKind};

const GAMEMODES: &[(&str, &str)] = &[
    ("survival", ""),
    ("creative", ""),
    ("adventure", ""),
    ("spectator", ""),
];

const SORT_ORDERS: &[(&str, &str)] = &[
    ("nearest", "Select from the nearest entity first"),
    ("furthest", "Select from the furthest entity first"),
    ("random", "Select random"),
    ("arbitrary", "Select by spawn time"),
];

/// Target selector refinements, in menu order.
pub static SELECTORS: ClauseSchema = ClauseSchema {
    noun: "selector",
    keys: &[
        KeySpec {
            key: "distance",
            description: "Distance to Entity(=Player)",
            value: ValueKind::Text {
                prompt: "Distance to entity (int or range e.g., 1..5 = 1~5)",
                error: "Please enter a distance value or range.",
            },
        },
        KeySpec {
            key: "score",
            description: "The score value or range which the entity has",
            value: ValueKind::Text {
                prompt: "Score (format: score value or range of A = 'A=1' or 'A=1..10')",
                error: "Please enter a score format.",
            },
        },
        KeySpec {
            key: "tag",
            description: "The tag which the entity has",
            value: ValueKind::Text {
                prompt: "Tag (format: <your-tag> | put '!' at the beginning to exclude the tag)",
                error: "Please enter a tag.",
            },
        },
        KeySpec {
            key: "team",
            description: "The team which the entity joins",
            value: ValueKind::Text {
                prompt: "Team (format: <your-team> | put '!' at the beginning to exclude the team)",
                error: "Please enter a team.",
            },
        },
        KeySpec {
            key: "limit",
            description: "Amount limit",
            value: ValueKind::Integer {
                prompt: "Limit (int)",
                error: "Please enter a limit (non-negative integer).",
                range: None,
            },
        },
        KeySpec {
            key: "level",
            description: "Experience level",
            value: ValueKind::Text {
                prompt: "Exp level (int or range format: '10' or '10..20')",
                error: "Please enter a level.",
            },
        },
        KeySpec {
            key: "gamemode",
            description: "Player gamemode",
            value: ValueKind::Choice {
                prompt: "Player gamemode:",
                options: GAMEMODES,
            },
        },
        KeySpec {
            key: "advancements",
            description: "The advancements which the player has",
            value: ValueKind::Text {
                prompt: "Advancement (format: <advancement_ID>=true/false)",
                error: "Please enter an advancement.",
            },
        },
        KeySpec {
            key: "predicate",
            description: "Match predicates(required datapacks)",
            value: ValueKind::Text {
                prompt: "Predicate (predicate_id | put '!' at the beginning to exclude the predicate)",
                error: "Please enter a predicate.",
            },
        },
        KeySpec {
            key: "sort",
            description: "Specify the order in which to select targets",
            value: ValueKind::Choice {
                prompt: "Sort:",
                options: SORT_ORDERS,
            },
        },
    ],
};
