use xeger::{Alphabet, Category, CharSet};

fn set(name: &str) -> &'static CharSet {
    Alphabet::global()
        .lookup(name)
        .unwrap_or_else(|| panic!("missing alphabet set {name:?}"))
}

fn text(name: &str) -> String {
    set(name).chars().collect()
}

#[test]
fn test_base_alphabet() {
    let base = Alphabet::global().base();
    assert_eq!(base.len(), 256);
    assert!(base.contains('\0'));
    assert!(base.contains('\u{ff}'));
    assert!(!base.contains('\u{100}'));
}

#[test]
fn test_simple_sets() {
    assert_eq!(text("digits"), "0123456789");
    assert_eq!(text("uppercase"), "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    assert_eq!(text("lowercase"), "abcdefghijklmnopqrstuvwxyz");
    assert_eq!(
        text("letters"),
        "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz"
    );
    assert_eq!(text("punctuation"), r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##);
    assert_eq!(text("whitespace"), "\t\n\x0b\x0c\r ");
    assert_eq!(text("domainsafe").len(), 63);
    assert_eq!(text("urlsafe").len(), 66);
    assert_eq!(text("postalsafe").len(), 67);
    assert_eq!(text("normal").len(), 63);
    assert_eq!(text("printable").len(), 100);
}

#[test]
fn test_word_sets() {
    let word = set("word");
    assert_eq!(word.len(), 63);
    assert!(word.contains('_'));
    assert!(!word.contains('-'));

    let nonword = set("nonword");
    assert_eq!(nonword.len(), 256 - 63);
    assert!(word.chars().all(|c| !nonword.contains(c)));
}

#[test]
fn test_complements() {
    for (name, complement) in [
        ("digits", "nondigits"),
        ("letters", "nonletters"),
        ("whitespace", "nonwhitespace"),
        ("word", "nonword"),
    ] {
        let a = set(name);
        let b = set(complement);
        assert_eq!(a.len() + b.len(), 256, "{name} / {complement}");
        assert_eq!(&a.union(b), Alphabet::global().base());
    }
}

#[test]
fn test_categories() {
    let alphabet = Alphabet::global();
    assert_eq!(alphabet.category(Category::Digit), set("digits"));
    assert_eq!(alphabet.category(Category::NotDigit), set("nondigits"));
    assert_eq!(alphabet.category(Category::Space), set("whitespace"));
    assert_eq!(alphabet.category(Category::NotSpace), set("nonwhitespace"));
    assert_eq!(alphabet.category(Category::Word), set("word"));
    assert_eq!(alphabet.category(Category::NotWord), set("nonword"));
}

#[test]
fn test_unknown_name() {
    assert!(Alphabet::global().lookup("klingon").is_none());
    assert_eq!(Alphabet::global().names().count(), 17);
}

#[test]
fn test_shared_between_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| Alphabet::global().base().len()))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 256);
    }
}
