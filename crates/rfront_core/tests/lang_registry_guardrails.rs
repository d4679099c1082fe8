use std::collections::HashMap;

use rfront_core::lang::keywords;
use rfront_core::lang::operators;
use rfront_core::lang::punctuation;

#[test]
fn keywords_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, keywords::KeywordId> = HashMap::new();

    for info in keywords::KEYWORDS {
        assert_eq!(
            keywords::from_str(info.canonical),
            Some(info.id),
            "keyword canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            keywords::as_str(info.id),
            info.canonical,
            "keyword as_str mismatch for {:?}",
            info.id
        );

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate keyword spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }

        for &alias in info.aliases {
            assert_eq!(
                keywords::from_str(alias),
                Some(info.id),
                "keyword alias not resolvable: {}",
                alias
            );
            if let Some(prev) = seen.insert(alias, info.id) {
                panic!(
                    "duplicate keyword alias spelling {:?}: {:?} and {:?}",
                    alias, prev, info.id
                );
            }
        }
    }
}

#[test]
fn operators_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, operators::OperatorId> = HashMap::new();

    for info in operators::OPERATORS {
        assert!(!info.spellings.is_empty(), "operator {:?} has no spelling", info.id);
        assert_eq!(operators::as_str(info.id), info.spellings[0]);

        for &sp in info.spellings {
            assert_eq!(
                operators::from_str(sp),
                Some(info.id),
                "operator spelling not resolvable: {}",
                sp
            );
            if let Some(prev) = seen.insert(sp, info.id) {
                panic!("duplicate operator spelling {:?}: {:?} and {:?}", sp, prev, info.id);
            }
        }
    }
}

#[test]
fn operators_have_at_least_one_fixity() {
    for info in operators::OPERATORS {
        assert!(
            info.is_binary() || info.is_unary(),
            "operator {:?} is neither binary nor unary",
            info.id
        );
    }
}

#[test]
fn operator_spellings_never_collide_with_keywords_or_punctuation() {
    for info in operators::OPERATORS {
        for &sp in info.spellings {
            assert_eq!(keywords::from_str(sp), None, "operator spelling {:?} is a keyword", sp);
            assert_eq!(punctuation::from_str(sp), None, "operator spelling {:?} is punctuation", sp);
        }
    }
}

#[test]
fn punctuation_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, punctuation::PunctuationId> = HashMap::new();

    for info in punctuation::PUNCTUATION {
        assert_eq!(
            punctuation::from_str(info.canonical),
            Some(info.id),
            "punctuation canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            punctuation::as_str(info.id),
            info.canonical,
            "punctuation as_str mismatch for {:?}",
            info.id
        );

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate punctuation spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn bracket_complement_is_an_involution() {
    let brackets: Vec<_> = punctuation::PUNCTUATION
        .iter()
        .filter(|p| punctuation::is_bracket(p.id))
        .map(|p| p.id)
        .collect();
    assert_eq!(brackets.len(), 8, "expected four bracket pairs");

    for &b in &brackets {
        let c = punctuation::complement(b).expect("bracket without complement");
        assert_eq!(punctuation::complement(c), Some(b), "complement not involutive for {:?}", b);
        assert!(punctuation::is_complement(b, c));
        assert!(punctuation::is_complement(c, b));

        for &other in &brackets {
            if other != c {
                assert!(
                    !punctuation::is_complement(b, other),
                    "{:?} unexpectedly complements {:?}",
                    b,
                    other
                );
            }
        }
    }
}
