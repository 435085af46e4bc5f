//! Known obfuscated script-scheme payloads must all sanitize to `about:blank`.

use urlsan_core::{sanitize, Sanitizer, BLANK_URL};

const DENYLISTED: [&str; 3] = ["javascript", "data", "vbscript"];

fn assert_blank(inputs: &[&str]) {
    for input in inputs {
        assert_eq!(sanitize(input), BLANK_URL, "input: {input:?}");
    }
}

/// Upper-case every other letter.
fn mixed_case(scheme: &str) -> String {
    scheme
        .chars()
        .enumerate()
        .map(|(i, c)| if i % 2 == 0 { c.to_ascii_uppercase() } else { c })
        .collect()
}

/// BOMs after the second letter, a zero-width space after the third, both
/// percent-encoded.
fn with_invisible_chars(scheme: &str) -> String {
    let mut out = String::new();
    for (i, c) in scheme.chars().enumerate() {
        out.push(c);
        match i {
            1 => out.push_str("%EF%BB%BF%EF%BB%BF"),
            2 => out.push_str("%e2%80%8b"),
            _ => {}
        }
    }
    out
}

#[test]
fn entity_encoded_payloads() {
    assert_blank(&[
        "&#0000106&#0000097&#0000118&#0000097&#0000115&#0000099&#0000114&#0000105&#0000112&#0000116&#0000058&#0000097&#0000108&#0000101&#0000114&#0000116&#0000040&#0000039&#0000088&#0000083&#0000083&#0000039&#0000041",
        "&#106;&#97;&#118;&#97;&#115;&#99;&#114;&#105;&#112;&#116;&#58;&#97;&#108;&#101;&#114;&#116;&#40;&#39;&#88;&#83;&#83;&#39;&#41;",
        "&#x6A&#x61&#x76&#x61&#x73&#x63&#x72&#x69&#x70&#x74&#x3A&#x61&#x6C&#x65&#x72&#x74&#x28&#x27&#x58&#x53&#x53&#x27&#x29",
        "jav&#x09;ascript:alert('XSS');",
        " &#14; javascript:alert('XSS');",
        "javasc&Tab;ript: alert('XSS');",
        "javasc&#\u{0}x09;ript:alert(1)",
        "java&#38;&#38;&#35;78&#59;ewLine&#38;newline&#59;&#59;script&#58;alert&#40;&#39;XSS&#39;&#41;",
        "java&&#78;ewLine&newline;;script:alert('XSS')",
    ]);
}

#[test]
fn escaped_whitespace_payloads() {
    assert_blank(&[
        "javascri\npt:alert('xss')",
        "javascri\rpt:alert('xss')",
        "javascri\tpt:alert('xss')",
        "javascrip\\%74t:alert('XSS')",
        "javascrip%5c%72t:alert()",
        "javascrip%5Ctt:alert()",
        "javascrip%255Ctt:alert()",
        "javascrip%25%35Ctt:alert()",
        "javascrip%25%35%43tt:alert()",
        "javascrip%25%32%35%25%33%35%25%34%33rt:alert()",
        "javascrip%255Crt:alert('%25xss')",
        "JaVaScRiP%0at:alert(document.domain)",
    ]);
}

#[test]
fn leading_control_characters() {
    assert_blank(&[
        "\u{c}javascript:alert()",
        "\u{b}javascript:alert()",
        "\tjavascript:alert()",
        "\njavascript:alert()",
        "\rjavascript:alert()",
        "\u{0}javascript:alert()",
        "\u{1}javascript:alert()",
    ]);
}

#[test]
fn every_denylisted_scheme_and_disguise() {
    for scheme in DENYLISTED {
        let cases = [
            format!("{scheme}:alert(document.domain)"),
            format!("&!*{scheme}:alert(document.domain)"),
            format!("{scheme}&colon;:alert(document.domain)"),
            format!("{scheme}&COLON;:alert(document.domain)"),
            format!("{}:alert(document.domain)", mixed_case(scheme)),
            format!("{}:alert(document.domain)", with_invisible_chars(scheme)),
            format!("%20%20%20%20{scheme}:alert(document.domain)"),
            format!("    {scheme}:alert(document.domain)"),
            format!("{scheme}%3Aalert(1)"),
            format!("{scheme}%253Aalert(1)"),
        ];
        for case in &cases {
            assert_eq!(sanitize(case), BLANK_URL, "input: {case:?}");
        }
    }
}

#[test]
fn undecodable_escape_does_not_shield_the_rest() {
    assert_blank(&[
        "javascript%3Aalert(1)%FF",
        "java%09script:alert(1)%FF",
        "%6Aavascript:alert(1)%C0",
        "%20%20data%3Atext/html,x%FF",
        "vbscript%253Amsgbox(1)%E2%82",
    ]);
}

#[test]
fn denylisted_word_outside_scheme_is_kept() {
    for scheme in DENYLISTED {
        let fragment = format!("http://example.com#{scheme}:foo");
        assert_eq!(sanitize(&fragment), fragment);

        let near_miss = format!("not_{scheme}:alert(document.domain)");
        assert_eq!(sanitize(&near_miss), near_miss);
    }
}

#[test]
fn entity_encoded_https_with_script_path() {
    let input = "&#104;&#116;&#116;&#112;&#115;&#0000058//&#101;&#120;&#97;&#109;&#112;&#108;&#101;&#46;&#99;&#111;&#109;/&#0000106&#0000097&#0000118&#0000097&#0000115&#0000099&#0000114&#0000105&#0000112&#0000116&#0000058&#0000097&#0000108&#0000101&#0000114&#0000116&#0000040&#0000039&#0000088&#0000083&#0000083&#0000039&#0000041";
    assert_eq!(sanitize(input), "https://example.com/javascript:alert('XSS')");
}

#[test]
fn entity_encoded_https_is_decoded() {
    let input = "&#104;&#116;&#116;&#112;&#115;&#0000058//&#101;&#120;&#97;&#109;&#112;&#108;&#101;&#46;&#99;&#111;&#109;";
    assert_eq!(sanitize(input), "https://example.com/");
}

#[test]
fn thousands_of_chained_entities_terminate() {
    let nested = "&#38;".repeat(10_000) + "#106;avascript:alert(1)";
    let report = Sanitizer::new().inspect(Some(&nested));
    assert!(!report.output.starts_with("javascript"));

    let padded: String = "javascript:alert(1)"
        .chars()
        .map(|c| format!("&#{}{};", "0".repeat(2_000), u32::from(c)))
        .collect();
    assert_eq!(sanitize(&padded), BLANK_URL);
}

#[test]
fn shared_across_threads() {
    let sanitizer = Sanitizer::new();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let url = format!("https://EXAMPLE.com/{i}");
                (sanitizer.sanitize(&url), sanitizer.sanitize("javascript:alert(1)"))
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let (ok, blank) = handle.join().unwrap();
        assert_eq!(ok, format!("https://example.com/{i}"));
        assert_eq!(blank, BLANK_URL);
    }
}
