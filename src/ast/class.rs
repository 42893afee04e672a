use super::Opcode;

/// A character class, `[...]` or `[^...]`.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Class {
    pub negated: bool,
    pub items: Vec<ClassItem>,
}

impl Class {
    #[must_use]
    pub fn new(items: Vec<ClassItem>) -> Self {
        Class {
            negated: false,
            items,
        }
    }

    #[must_use]
    pub fn negated(items: Vec<ClassItem>) -> Self {
        Class {
            negated: true,
            items,
        }
    }
}

/// A member of a [`Class`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ClassItem {
    Literal(char),
    Range(char, char), // inclusive
    Category(Category),
}

impl ClassItem {
    #[must_use]
    pub const fn opcode(self) -> Opcode {
        match self {
            ClassItem::Literal(_) => Opcode::Literal,
            ClassItem::Range(..) => Opcode::Range,
            ClassItem::Category(_) => Opcode::Category,
        }
    }
}

/// Shorthand classes like `\d` or `\W`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Category {
    Digit,    // \d
    NotDigit, // \D
    Space,    // \s
    NotSpace, // \S
    Word,     // \w
    NotWord,  // \W
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Digit,
        Category::NotDigit,
        Category::Space,
        Category::NotSpace,
        Category::Word,
        Category::NotWord,
    ];

    /// Returns the category for an escape letter ('d' for `\d`).
    #[must_use]
    pub const fn from_escape(c: char) -> Option<Self> {
        Some(match c {
            'd' => Category::Digit,
            'D' => Category::NotDigit,
            's' => Category::Space,
            'S' => Category::NotSpace,
            'w' => Category::Word,
            'W' => Category::NotWord,
            _ => return None,
        })
    }

    /// The name of the alphabet set this category draws from.
    #[must_use]
    pub const fn set_name(self) -> &'static str {
        match self {
            Category::Digit => "digits",
            Category::NotDigit => "nondigits",
            Category::Space => "whitespace",
            Category::NotSpace => "nonwhitespace",
            Category::Word => "word",
            Category::NotWord => "nonword",
        }
    }
}
