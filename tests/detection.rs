use social_detector::{
    Catalog, Confidence, DetectionMethod, DetectionOptions, SocialDetector, quick_detect,
};
use std::time::{Duration, Instant};

/// WeChat profile URLs live on `weixin.qq.com`, which QQ claims first.
const COLLIDING_PLATFORMS: &[&str] = &["wechat"];

fn detect(input: &str) -> social_detector::DetectionResult {
    SocialDetector::new().detect(input, None, &DetectionOptions::default())
}

#[test]
fn generated_profile_urls_round_trip() {
    let detector = SocialDetector::new();
    for pattern in Catalog::builtin().iter() {
        if COLLIDING_PLATFORMS.contains(&pattern.key()) {
            continue;
        }
        let url = detector
            .generate_profile_url(pattern.key(), "testuser")
            .unwrap_or_else(|| panic!("no profile url for {}", pattern.key()));
        let result = detector.detect(&url, None, &DetectionOptions::default());
        assert_eq!(result.platform, pattern.key(), "{url}");
        assert!(result.is_valid);
    }
}

#[test]
fn wechat_collision_resolves_to_qq() {
    let detector = SocialDetector::new();
    let url = detector.generate_profile_url("wechat", "testuser").unwrap();
    assert_eq!(detector.detect(&url, None, &DetectionOptions::default()).platform, "qq");
}

#[test]
fn known_platform_urls() {
    let cases = [
        ("https://instagram.com/test", "instagram"),
        ("https://facebook.com/test", "facebook"),
        ("https://fb.com/test", "facebook"),
        ("https://x.com/test", "twitter"),
        ("https://mobile.twitter.com/test", "twitter"),
        ("https://youtube.com/@test", "youtube"),
        ("https://youtu.be/test123", "youtube"),
        ("https://linkedin.com/in/test", "linkedin"),
        ("https://github.com/test", "github"),
        ("https://tiktok.com/@test", "tiktok"),
        ("https://reddit.com/u/test", "reddit"),
        ("https://twitch.tv/test", "twitch"),
        ("https://pinterest.com/test", "pinterest"),
        ("https://discord.com/users/123456789", "discord"),
        ("https://t.me/test", "telegram"),
        ("https://medium.com/@test", "medium"),
        ("https://www.instagram.com/test", "instagram"),
        ("https://bsky.app/profile/test", "bluesky"),
    ];
    for (url, expected) in cases {
        let r = detect(url);
        assert_eq!(r.platform, expected, "{url}");
        assert_eq!(r.confidence, Confidence::High, "{url}");
    }
}

#[test]
fn empty_and_missing_input_are_unknown() {
    let detector = SocialDetector::new();
    let opts = DetectionOptions::default();
    for r in [detector.detect("", None, &opts), detector.detect_optional(None, None, &opts)] {
        assert_eq!(r.platform, "unknown");
        assert!(!r.is_valid);
    }
}

#[test]
fn case_insensitive() {
    let upper = detect("https://INSTAGRAM.COM/test");
    let lower = detect("https://instagram.com/test");
    assert_eq!(upper.platform, lower.platform);
    assert_eq!(upper.is_valid, lower.is_valid);
}

#[test]
fn scheme_is_optional_when_a_dot_is_present() {
    for bare in ["instagram.com/test", "github.com/dev", "t.me/someone"] {
        let with = detect(&format!("https://{bare}"));
        let without = detect(bare);
        assert_eq!(with.platform, without.platform, "{bare}");
        assert!(without.is_valid);
    }
}

#[test]
fn uppercase_scheme_is_recognised() {
    let r = detect("HTTP://Instagram.com/Test");
    assert_eq!(r.platform, "instagram");
    assert_eq!(r.normalized_url.as_deref(), Some("http://instagram.com/test"));
}

#[test]
fn username_round_trip() {
    let detector = SocialDetector::new();
    let url = detector.generate_profile_url("instagram", "abc123").unwrap();
    assert_eq!(detector.extract_username(&url, None).as_deref(), Some("abc123"));
}

#[test]
fn prefix_deduplication() {
    let detector = SocialDetector::new();
    let plain = detector.generate_profile_url("youtube", "name");
    let prefixed = detector.generate_profile_url("youtube", "@name");
    assert_eq!(plain, prefixed);
    assert_eq!(plain.as_deref(), Some("https://youtube.com/@name"));
}

#[test]
fn pattern_matches_are_always_high() {
    for url in ["https://x.com/a", "https://github.com/b", "https://youtube.com/watch?v=c"] {
        let r = detect(url);
        assert_eq!(r.confidence, Confidence::High);
        assert_eq!(r.detection_method, DetectionMethod::Pattern);
    }
}

#[test]
fn structural_fallback_is_low() {
    let r = detect("https://mirror.example/watch?v=abc");
    assert_eq!(r.platform, "youtube");
    assert_eq!(r.confidence, Confidence::Low);
    assert_eq!(r.detection_method, DetectionMethod::UrlStructure);
}

#[test]
fn twitter_scenario() {
    let r = detect("https://x.com/testuser");
    assert_eq!(r.platform, "twitter");
    assert!(r.is_valid);
    assert_eq!(r.confidence, Confidence::High);
}

#[test]
fn youtube_username_scenario() {
    let r = SocialDetector::new().detect(
        "https://youtube.com",
        Some("testuser"),
        &DetectionOptions::default(),
    );
    assert_eq!(r.normalized_url.as_deref(), Some("https://youtube.com/@testuser"));
}

#[test]
fn unknown_site_scenario() {
    let r = detect("https://unknown-site.example/test");
    assert_eq!(r.platform, "unknown");
    assert!(!r.is_valid);
    assert_eq!(r.confidence, Confidence::Low);
    assert_eq!(r.detection_method, DetectionMethod::None);
}

#[test]
fn empty_username_has_no_profile_url() {
    assert_eq!(SocialDetector::new().generate_profile_url("instagram", ""), None);
}

#[test]
fn long_and_decorated_urls() {
    let long = format!("https://instagram.com/{}", "a".repeat(2000));
    assert_eq!(detect(&long).platform, "instagram");
    for url in [
        "https://instagram.com/test?ref=profile&source=web#about",
        "https://youtube.com/@test?tab=videos",
        "https://linkedin.com/in/test?trk=profile",
        "https://instagram.com/user.name_123",
    ] {
        assert!(detect(url).is_valid, "{url}");
    }
}

#[test]
fn supported_platforms_listing() {
    let platforms = SocialDetector::new().supported_platforms();
    assert_eq!(platforms.len(), 35);
    let youtube = platforms.iter().find(|p| p.key == "youtube").unwrap();
    assert_eq!(youtube.display_name, "YouTube");
    assert_eq!(youtube.example_domain, "youtube.com");
    assert_eq!(youtube.base_url, "https://youtube.com/@");
}

#[test]
fn singleton_matches_fresh_instance() {
    let opts = DetectionOptions::default();
    assert_eq!(
        quick_detect("https://instagram.com/test", None, &opts).platform,
        SocialDetector::new().detect("https://instagram.com/test", None, &opts).platform
    );
}

#[test]
fn repeated_detections_stay_fast() {
    let detector = SocialDetector::new();
    let opts = DetectionOptions::default();

    let started = Instant::now();
    for i in 0..1000 {
        let r = detector.detect(&format!("https://instagram.com/user{i}"), None, &opts);
        assert!(r.is_valid);
    }
    assert!(started.elapsed() < Duration::from_secs(10));

    for _ in 0..1000 {
        let _ = detector.detect("https://unknown-site.example/test", None, &opts);
    }
    // Pattern hits never reach the cache; the repeated miss is stored once.
    assert_eq!(detector.cache().len(), 1);
}
