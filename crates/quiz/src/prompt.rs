//! Instruction sent to the model

use serde_json::json;

use crate::types::{Answer, Question, QuestionKind};
use crate::{QuizConfig, QuizPlan};

/// Leading `max_chars` characters of `text` (never splits a character)
#[must_use]
pub fn excerpt(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Worked example embedded in the instruction to pin down the JSON shape
fn example_output() -> String {
    let example_question = Question {
        id: 1,
        kind: QuestionKind::Choice,
        question: "Question text...".to_string(),
        options: Some(vec![
            "Option 1".to_string(),
            "Option 2".to_string(),
            "Option 3".to_string(),
            "Option 4".to_string(),
        ]),
        answer: Answer::Index(0),
        explanation: "Explanation...".to_string(),
        pdf_ref: "Referenced page or keyword".to_string(),
    };

    let example = json!({
        "summary": "This document covers ... Its key concepts are ..., and it concludes that ...",
        "questions": [example_question],
    });

    format!("{example:#}")
}

/// Build the quiz instruction for `plan` over the leading excerpt of `text`.
#[must_use]
pub fn build_prompt(plan: &QuizPlan, text: &str, config: &QuizConfig) -> String {
    let material = excerpt(text, config.max_excerpt_chars);

    format!(
        "You are a professional study tutor AI. Based on the text provided below,\n\
         1. summarize the key content of the whole text in 3-5 sentences (summary), and\n\
         2. write exam questions (questions) that check how well a learner understood it.\n\
         \n\
         [Requirements]\n\
         1. Write {total} questions in total.\n   \
            - Multiple choice (type \"choice\"): {choice} questions\n   \
            - Short answer (type \"short\"): {short} questions\n   \
            - Essay (type \"essay\"): {essay} questions\n\
         2. Write every question, option, answer and explanation in {language}.\n\
         3. Return ONLY a bare JSON object. Do not wrap it in markdown code fences.\n\
         4. Number questions sequentially from 1. Only multiple choice questions have \"options\" \
            (four of them) and their \"answer\" is the 0-based index of the correct option.\n\
         \n\
         [Example JSON structure]\n\
         {example}\n\
         \n\
         [Text to analyze]\n\
         {material}\n",
        total = plan.total,
        choice = plan.choice_count,
        short = plan.short_count,
        essay = plan.essay_count,
        language = config.output_language,
        example = example_output(),
        material = material,
    )
}
