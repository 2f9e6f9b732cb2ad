//! 리뷰 요청 프롬프트 구성 규칙.

use super::review::ChangedFile;

pub const REVIEW_PREAMBLE: &str = "You are a senior engineer. Review these code changes:\n\n";

/// 변경 파일 목록으로 리뷰 프롬프트를 만든다.
/// patch가 없거나 빈 파일은 제외하고, 입력 순서를 유지한다.
pub fn build_prompt(files: &[ChangedFile]) -> String {
    let blocks: Vec<String> = files
        .iter()
        .filter_map(|file| {
            file.reviewable_patch()
                .map(|patch| format!("File: {}\n{}\n", file.filename, patch))
        })
        .collect();

    format!("{REVIEW_PREAMBLE}{}", blocks.join("\n\n"))
}
