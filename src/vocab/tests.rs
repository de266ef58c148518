use super::*;

#[test]
fn test_brand_tiers() {
    let vocab = Vocabulary::default();
    assert_eq!(vocab.brand_tier("格力"), Some(BrandTier::One));
    assert_eq!(vocab.brand_tier("奥克斯"), Some(BrandTier::Two));
    assert_eq!(vocab.brand_tier("美的"), Some(BrandTier::Two));
    assert_eq!(vocab.brand_tier("TCL"), Some(BrandTier::Two));
    assert_eq!(vocab.brand_tier("海尔"), Some(BrandTier::Other));
    assert_eq!(vocab.brand_tier("不存在"), None);
}

#[test]
fn test_canonical_brand_resolves_variants() {
    let vocab = Vocabulary::default();
    assert_eq!(vocab.canonical_brand("GREE"), Some("格力"));
    assert_eq!(vocab.canonical_brand("gree"), Some("格力"));
    assert_eq!(vocab.canonical_brand("珠海格力"), Some("格力"));
    assert_eq!(vocab.canonical_brand("格力"), Some("格力"));
    assert_eq!(vocab.canonical_brand("MIDEA"), Some("美的"));
    assert_eq!(vocab.canonical_brand("nobody"), None);
}

#[test]
fn test_category_lookup() {
    let vocab = Vocabulary::default();
    assert_eq!(vocab.category_of("格力KFR-35GW"), Some("空调"));
    assert_eq!(vocab.category_of("海尔BCD-215"), Some("冰箱"));
    assert_eq!(vocab.category_of("米家无线吸尘器2"), Some("吸尘器"));
    assert_eq!(vocab.category_of("电脑椅2017版"), Some("椅子"));
    assert_eq!(vocab.category_of("something else"), None);
}

#[test]
fn test_category_keywords_case_insensitive() {
    let vocab = Vocabulary::default();
    assert_eq!(vocab.category_of("kfr-26gw"), Some("空调"));
    assert_eq!(vocab.category_of("xqg100 滚筒"), Some("洗衣机"));
}

#[test]
fn test_version_suffix_detection() {
    let vocab = Vocabulary::default();
    assert!(vocab.has_version_suffix("x2pro"));
    assert!(vocab.has_version_suffix("x2Pro"));
    assert!(vocab.has_version_suffix("x2PLUS"));
    assert!(vocab.has_version_suffix("电脑椅2017版"));
    assert!(vocab.has_version_suffix("净水器mini"));
    assert!(!vocab.has_version_suffix("KFR-35GW"));
}

#[test]
fn test_series_marker() {
    let vocab = Vocabulary::default();
    assert!(vocab.shares_series_marker("格力KFR-35GW", "KFR-26GW"));
    assert!(!vocab.shares_series_marker("格力KFR-35GW", "BCD-215"));
}
