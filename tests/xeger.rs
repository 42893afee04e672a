use rand::{SeedableRng, rngs::StdRng};
use std::collections::BTreeSet;
use xeger::{Error, Flags, Generator, Result, SyntaxError};

fn generator() -> Generator<StdRng> {
    Generator::new(StdRng::seed_from_u64(2024))
}

#[track_caller]
fn outputs(pattern: &str, samples: usize) -> BTreeSet<String> {
    let mut generator = generator();
    (0..samples)
        .map(|_| {
            generator
                .xeger(pattern)
                .unwrap_or_else(|err| panic!("{pattern:?} failed: {err}"))
        })
        .collect()
}

#[track_caller]
fn assert_all(pattern: &str, check: impl Fn(&str) -> bool) {
    let mut generator = generator();
    for _ in 0..500 {
        let s = generator.xeger(pattern).expect("generation failed");
        assert!(check(&s), "{s:?} does not fit {pattern:?}");
    }
}

#[test]
fn test_class_with_exact_repetition() {
    let expected: BTreeSet<String> = ["abb", "abc", "acb", "acc"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(outputs("a[bc]{2,2}", 500), expected);
}

#[test]
fn test_backreference() {
    assert_eq!(
        outputs(r"(ab)\1", 100),
        BTreeSet::from(["abab".to_string()])
    );
}

#[test]
fn test_alternation() {
    let expected: BTreeSet<String> = ["red", "green", "blue"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(outputs("red|green|blue", 300), expected);
}

#[test]
fn test_optional() {
    let expected: BTreeSet<String> = ["color", "colour"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(outputs("colou?r", 200), expected);
}

#[test]
fn test_digits_and_words() {
    assert_all(r"\d{3}-\d{4}", |s| {
        let bytes = s.as_bytes();
        bytes.len() == 8
            && bytes[3] == b'-'
            && bytes[..3].iter().chain(&bytes[4..]).all(u8::is_ascii_digit)
    });
    assert_all(r"\w+@\w+\.com", |s| {
        let Some((user, domain)) = s.split_once('@') else {
            return false;
        };
        let is_word = |part: &str| {
            !part.is_empty() && part.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        };
        is_word(user) && domain.strip_suffix(".com").is_some_and(is_word)
    });
}

#[test]
fn test_negated_set() {
    assert_all("[^a-z]{5}", |s| {
        s.chars().count() == 5 && s.chars().all(|c| !c.is_ascii_lowercase() && u32::from(c) < 256)
    });
}

#[test]
fn test_star_respects_default_limit() {
    assert_all("x*", |s| s.len() <= xeger::DEFAULT_LIMIT);
    assert_all("(ab)+", |s| s.len() % 2 == 0 && (2..=20).contains(&s.len()));
}

#[test]
fn test_nested_groups_and_refs() {
    assert_all(r"(?P<tag>[a-z]{1,3})(\d)-(?P=tag)\2", |s| {
        let Some((left, right)) = s.split_once('-') else {
            return false;
        };
        left == right
    });
}

#[test]
fn test_lookahead_is_included() {
    assert_eq!(outputs("foo(?=bar)", 10), BTreeSet::from(["foobar".to_string()]));
    assert_eq!(outputs("foo(?!bar)", 10), BTreeSet::from(["foo".to_string()]));
}

#[test]
fn test_anchors_produce_nothing() {
    assert_eq!(outputs(r"^\Aab\b$", 10), BTreeSet::from(["ab".to_string()]));
}

#[test]
fn test_verbose_flags() -> Result<()> {
    let s = generator().xeger_with_flags(
        r"
        \d{2}   # day
        /       # separator
        \d{2}   # month
        ",
        Flags::VERBOSE,
    )?;
    assert_eq!(s.len(), 5);
    assert_eq!(&s[2..3], "/");
    Ok(())
}

#[test]
fn test_limit_applies_to_patterns() {
    let mut generator = generator().with_limit(3);
    for _ in 0..200 {
        assert!(generator.xeger("a+").unwrap().len() <= 3);
        assert_eq!(generator.xeger("a{5,}").unwrap().len(), 5);
    }
}

#[test]
fn test_invalid_pattern() {
    assert_eq!(
        xeger::xeger("(unclosed"),
        Err(Error::InvalidInput {
            pos: 0,
            err: SyntaxError::MissingParen
        })
    );
    assert_eq!(
        xeger::xeger("a{5,1}"),
        Err(Error::InvalidRepetition { min: 5, max: 1 })
    );
}
