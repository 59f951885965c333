//! The authored catalog shipped with the build.
//!
//! Post metadata is declared inline; markdown bodies live under `content/`
//! and are embedded at compile time. Slugs pair the language variants of
//! each post; `Catalog::verify()` (run by the test suite) keeps the two
//! tables in lockstep.

use crate::catalog::{BlogPostMeta, Catalog};
use crate::lang::Lang;

fn post(
    slug: &str,
    title: &str,
    excerpt: &str,
    category: &str,
    date: &str,
    tags: &[&str],
    image: &str,
    read_time: u32,
    lang: Lang,
) -> BlogPostMeta {
    BlogPostMeta {
        slug: slug.to_string(),
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        category: category.to_string(),
        author: "Chrobox Team".to_string(),
        date: date.to_string(),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        image: image.to_string(),
        read_time,
        lang,
    }
}

impl Catalog {
    /// The full bilingual catalog: three posts, each in English and Korean.
    pub fn bundled() -> Self {
        Catalog::new(vec![
            post(
                "what-is-time-boxing",
                "What is Time-Boxing? The Ultimate Guide to Mastering Your Time",
                "Discover how time-boxing can transform your productivity. Learn the \
                 science behind this powerful technique and how to implement it \
                 effectively in your daily routine.",
                "Productivity",
                "2024-12-01",
                &["time-boxing", "productivity", "time-management", "focus"],
                "/screenshots/en/1.png",
                8,
                Lang::En,
            ),
            post(
                "5-time-boxing-strategies",
                "5 Time-Boxing Strategies Used by Top CEOs and Entrepreneurs",
                "Learn the exact time-boxing strategies that Elon Musk, Bill Gates, and \
                 other successful leaders use to maximize their productivity and achieve \
                 extraordinary results.",
                "Productivity",
                "2024-12-03",
                &["time-boxing", "ceo", "entrepreneur", "productivity-tips", "success"],
                "/screenshots/en/2.png",
                6,
                Lang::En,
            ),
            post(
                "time-boxing-vs-pomodoro",
                "Time-Boxing vs Pomodoro: Which Technique is Right for You?",
                "A comprehensive comparison of time-boxing and the Pomodoro Technique. \
                 Discover which productivity method suits your work style and how to get \
                 the most from each approach.",
                "Productivity",
                "2024-12-05",
                &["time-boxing", "pomodoro", "comparison", "productivity", "focus"],
                "/screenshots/en/3.png",
                7,
                Lang::En,
            ),
            post(
                "what-is-time-boxing",
                "타임박싱이란? 시간을 마스터하는 완벽 가이드",
                "타임박싱이 어떻게 생산성을 혁신적으로 바꿀 수 있는지 알아보세요. 이 강력한 \
                 기법의 과학적 원리와 일상에서 효과적으로 적용하는 방법을 소개합니다.",
                "생산성",
                "2024-12-01",
                &["타임박싱", "생산성", "시간관리", "집중력"],
                "/screenshots/ko/1.png",
                8,
                Lang::Ko,
            ),
            post(
                "5-time-boxing-strategies",
                "세계적인 CEO들이 사용하는 5가지 타임박싱 전략",
                "일론 머스크, 빌 게이츠 등 성공한 리더들이 생산성을 극대화하고 놀라운 성과를 \
                 달성하기 위해 사용하는 정확한 타임박싱 전략을 배워보세요.",
                "생산성",
                "2024-12-03",
                &["타임박싱", "CEO", "기업가", "생산성팁", "성공"],
                "/screenshots/ko/2.png",
                6,
                Lang::Ko,
            ),
            post(
                "time-boxing-vs-pomodoro",
                "타임박싱 vs 뽀모도로: 어떤 기법이 나에게 맞을까?",
                "타임박싱과 뽀모도로 기법의 종합 비교. 어떤 생산성 방법이 당신의 업무 스타일에 \
                 맞는지 알아보고 각 접근법에서 최대 효과를 얻는 방법을 발견하세요.",
                "생산성",
                "2024-12-05",
                &["타임박싱", "뽀모도로", "비교", "생산성", "집중력"],
                "/screenshots/ko/3.png",
                7,
                Lang::Ko,
            ),
        ])
        .with_body(
            Lang::En,
            "what-is-time-boxing",
            include_str!("../content/en/what-is-time-boxing.md"),
        )
        .with_body(
            Lang::En,
            "5-time-boxing-strategies",
            include_str!("../content/en/5-time-boxing-strategies.md"),
        )
        .with_body(
            Lang::En,
            "time-boxing-vs-pomodoro",
            include_str!("../content/en/time-boxing-vs-pomodoro.md"),
        )
        .with_body(
            Lang::Ko,
            "what-is-time-boxing",
            include_str!("../content/ko/what-is-time-boxing.md"),
        )
        .with_body(
            Lang::Ko,
            "5-time-boxing-strategies",
            include_str!("../content/ko/5-time-boxing-strategies.md"),
        )
        .with_body(
            Lang::Ko,
            "time-boxing-vs-pomodoro",
            include_str!("../content/ko/time-boxing-vs-pomodoro.md"),
        )
    }
}
