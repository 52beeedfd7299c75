use super::{ClauseSchema, KeySpec, ValueKind};

const RARITIES: &[(&str, &str)] = &[
    ("common", "Normal: white, Enchanted: aqua"),
    ("uncommon", "Normal: yellow, Enchanted: aqua"),
    ("rare", "Normal: aqua, Enchanted: light_purple"),
    ("epic", "light_purple"),
];

/// Item components, in menu order.
pub static COMPONENTS: ClauseSchema = ClauseSchema {
    noun: "component",
    keys: &[
        KeySpec {
            key: "item_name",
            description: "Item Name(Override the original name)",
            value: ValueKind::Quoted {
                prompt: "item_name (override the original name)",
                error: "Please enter an item name.",
            },
        },
        KeySpec {
            key: "custom_name",
            description: "Item Name(looks like it was edited with an anvil, do not override the original name)",
            value: ValueKind::Quoted {
                prompt: "custom_name (looks like it was edited with an anvil; italic)",
                error: "Please enter a custom_name.",
            },
        },
        KeySpec {
            key: "lore",
            description: "Item Lore",
            value: ValueKind::Lines {
                prompt: "lore (lore of the item, insert '<br>' to start a new line)",
            },
        },
        KeySpec {
            key: "damage",
            description: "How much to reduce the durability",
            value: ValueKind::Integer {
                prompt: "damage (how much to reduce the durability, non-negative integer)",
                error: "Please enter a valid damage value (non-negative integer).",
                range: None,
            },
        },
        KeySpec {
            key: "enchantment_glint_override",
            description: "Whether show glint of enchantment(no enchantments)",
            value: ValueKind::Boolean {
                prompt: "enchantment_glint_override (show the enchantment glint without enchantments, true/false)",
            },
        },
        KeySpec {
            key: "enchantments",
            description: "Item Enchantments",
            value: ValueKind::Enchantments,
        },
        KeySpec {
            key: "food",
            description: "Setting edible items",
            value: ValueKind::Food {
                prompt: "food (format: <nutrition(int)>,<saturation(int)>,<can_always_eat(bool)>\n    \
                         nutrition: Amount of hunger level restored when eating\n    \
                         saturation: Amount of hidden hunger level restored when eating\n    \
                         can_always_eat: Whether can eat when the hunger level is MAX)",
            },
        },
        KeySpec {
            key: "max_damage",
            description: "The maximum durability value of that item",
            value: ValueKind::Integer {
                prompt: "max_damage (the maximum durability value of that item, non-negative integer)",
                error: "Please enter a valid max damage (non-negative integer).",
                range: None,
            },
        },
        KeySpec {
            key: "max_stack_size",
            description: "The maximum stack size value of that item",
            value: ValueKind::Integer {
                prompt: "max_stack_size (the maximum stack size value of that item, int 1-99)",
                error: "Please enter a valid max stack size (int, 1-99).",
                range: Some(1..=99),
            },
        },
        KeySpec {
            key: "rarity",
            description: "Item Rarity",
            value: ValueKind::Choice {
                prompt: "rarity (item rarity):",
                options: RARITIES,
            },
        },
    ],
};
