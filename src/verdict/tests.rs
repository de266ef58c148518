use super::*;
use crate::vocab::Vocabulary;

fn vocab() -> Vocabulary {
    Vocabulary::default()
}

#[test]
fn test_decide_candidate_unmappable_is_not_found() {
    assert_eq!(decide("一级", ""), Verdict::NotFound);
    assert_eq!(decide("一级", "未知"), Verdict::NotFound);
    assert_eq!(decide("", ""), Verdict::NotFound);
    assert_eq!(decide("garbage", "N/A"), Verdict::NotFound);
}

#[test]
fn test_decide_declared_missing() {
    assert_eq!(decide("", "2级"), Verdict::DeclaredMissing);
    assert_eq!(decide("无", "1"), Verdict::DeclaredMissing);
}

#[test]
fn test_decide_equal_grades() {
    assert_eq!(decide("一级", "1"), Verdict::Correct);
    assert_eq!(decide("1级", "I"), Verdict::Correct);
    assert_eq!(decide("2", "二级"), Verdict::Correct);
}

#[test]
fn test_decide_differing_grades() {
    assert_eq!(decide("三级", "V"), Verdict::Incorrect);
    assert_eq!(decide("一级", "二级"), Verdict::Incorrect);
}

#[test]
fn test_decide_full_table() {
    // declared {absent, one, three} × candidate {absent, one, three}
    let cases = [
        ("", "", Verdict::NotFound),
        ("", "1", Verdict::DeclaredMissing),
        ("", "3", Verdict::DeclaredMissing),
        ("一级", "", Verdict::NotFound),
        ("一级", "1", Verdict::Correct),
        ("一级", "3", Verdict::Incorrect),
        ("三级", "", Verdict::NotFound),
        ("三级", "1", Verdict::Incorrect),
        ("三级", "3", Verdict::Correct),
    ];
    for (declared, candidate, expected) in cases {
        assert_eq!(
            decide(declared, candidate),
            expected,
            "declared={declared:?} candidate={candidate:?}"
        );
    }
}

#[test]
fn test_relevance_category_conflict() {
    // Air conditioner vs fridge.
    assert!(!is_relevant("格力KFR-35GW", "", "BCD-215WDPV 冰箱", "", &vocab()));
}

#[test]
fn test_relevance_category_agreement_passes() {
    assert!(is_relevant("格力KFR-35GW", "", "KFR-35GW/FNhAa-B1", "", &vocab()));
}

#[test]
fn test_relevance_cjk_heavy_mismatch() {
    // Mostly-CJK identifier with a digit; both categories unknown, so the
    // decision comes from the CJK-part similarity.
    assert!(!is_relevant("米家电暖桌2", "", "智能跑步带X10", "", &vocab()));
}

#[test]
fn test_relevance_cjk_heavy_match() {
    assert!(is_relevant("米家无线吸尘器2", "", "米家无线吸尘器2标准版", "", &vocab()));
}

#[test]
fn test_relevance_cjk_heavy_is_terminal() {
    // Producers are wildly different, but the terminal CJK check already
    // decided relevance.
    assert!(is_relevant(
        "米家无线吸尘器2",
        "小米公司",
        "米家无线吸尘器2",
        "completely different",
        &vocab()
    ));
}

#[test]
fn test_relevance_brand_conflict() {
    assert!(!is_relevant(
        "美的空调KFR-26GW",
        "",
        "格力KFR-26GW",
        "",
        &vocab()
    ));
}

#[test]
fn test_relevance_producer_mismatch() {
    assert!(!is_relevant(
        "KFR-35GW/X",
        "aaaaaaaaaa",
        "KFR-35GW/X2",
        "zzzzzzzzzz",
        &vocab()
    ));
}

#[test]
fn test_relevance_similarity_floor() {
    assert!(!is_relevant("KQW-900", "", "ZB12-米", "", &vocab()));
}

#[test]
fn test_relevance_accepts_close_models() {
    assert!(is_relevant("海尔BCD-215", "", "BCD-215WDPV", "", &vocab()));
}
