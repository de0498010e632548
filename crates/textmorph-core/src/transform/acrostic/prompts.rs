//! Prompt templates for acrostic poems
//!
//! `$input` is replaced with the raw input and
//! `$split_filter_characters_in_order` with a JSON array of the characters
//! each line must start with.

use crate::classify::Language;

pub const INPUT_PLACEHOLDER: &str = "$input";
pub const CHARACTERS_PLACEHOLDER: &str = "$split_filter_characters_in_order";

/// Appended to the user message to turn off model-side reasoning traces
pub const DIRECTIVE_SUFFIX: &str = " /no_think";

const CHINESE_SYSTEM: &str = "你是一个擅长使用中文生成藏头诗的汉语言文学大师。";

const CHINESE_USER: &str = r#"根据输入文字生成藏头诗，要求：
1.每句首字按顺序使用输入文字每句7个字
2.句子的个数与输入中汉字文字的字数相同，例如输入是3个汉字，你生成的输出句子应该只有3句。
3.你只需要关注输入的中文即可，输出的句子的首个字的顺序与输入的中文汉字的顺序一致。

[输出格式]
以json格式输出
{
    "split_characters_in_order": list[str] //输入的中文汉字顺序拆分至list中
    "sentences": list[str] //生成的藏头诗句子，每个句子一个list元素，每个句子7个字
}

示例：
输入：人工智能
提示：人工智能，split_characters_in_order：["人","工","智","能"]，请严格参考
输出：
{
    "split_characters_in_order": ["人","工","智","能"],
    "sentences": list["人寰万象入云巅","工巧难量道德边","智启星河应有度","能持玉衡守方圆"]
}

输入为：$input
提示：$input，split_characters_in_order：$split_filter_characters_in_order，请严格参考
输出："#;

const ENGLISH_SYSTEM: &str = "You are a poet skilled at crafting English acrostic poems.";

const ENGLISH_USER: &str = r#"Generate an English acrostic poem where:
1.The English acrostic poem should begin with each letter of input, generating one sentence per letter.
2.The number of sentences should match the number of letters in the input. For example, if the input contains 3 letters, your output should consist of exactly 3 sentences.
3.You only need to focus on the input letters, the first character of the output sentences must follow the exact order of the input letters.
4. dont pay attention to the meaning of the input, just generate a poem based on the letters. dont let spaces or other Non-English characters between letters affect the output.

[output format]
write in json format
{
    "split_characters_in_order": list[str] //The input letters should be split into a list in the order they appear.
    "sentences": list[str] //The generated acrostic poem lines should each be a separate element in a list.
}

Example:
input: Hope
hint: Hope, split_characters_in_order: ["H","o","p","e"], Please refer strictly.
Output:
{
    "split_characters_in_order": ["H","o","p","e"],
    "sentences": ["Holding on through the darkest nights","Opening hearts to let in the light","Pushing forward, step by steady step","Embracing dreams that never sleep"]
}

input: zhang 3san feng
hint: zhang 3san feng, split_characters_in_order: ["z","h","a","n","g","s","a","n","f","e","n","g"], Please refer strictly.
Output:
{
    "split_characters_in_order": ["z","h","a","n","g","s","a","n","f","e","n","g"],
    "sentences": [
        "Zen-like wisdom, calm yet deep",
        "Harmony in motion, soft yet steep",
        "Art of balance, fist and flow",
        "Nature's rhythm, fast then slow",
        "Grandmaster's touch, gentle, strong",
        "Still as mountains, patient long",
        "Alchemy of mind and breath",
        "Neutral force defies death",
        "Floating clouds, his palm's embrace",
        "Eternal Dao, time and space",
        "No desire, yet all achieved",
        "Grace in stillness, truth perceived"
    ]
}

input: $input
hint: $input, split_characters_in_order: $split_filter_characters_in_order, Please refer strictly.
output:"#;

/// Persona message for `language`
pub fn system_prompt(language: Language) -> &'static str {
    match language {
        Language::Chinese => CHINESE_SYSTEM,
        Language::English => ENGLISH_SYSTEM,
    }
}

/// Instruction message for `language` with both placeholders filled in
pub fn user_prompt(language: Language, input: &str, characters: &[char]) -> String {
    let template = match language {
        Language::Chinese => CHINESE_USER,
        Language::English => ENGLISH_USER,
    };
    let characters: Vec<String> = characters.iter().map(char::to_string).collect();
    let characters = serde_json::to_string(&characters).unwrap_or_else(|_| "[]".to_string());

    // Characters first so an input containing a placeholder is left alone
    let mut prompt = template
        .replace(CHARACTERS_PLACEHOLDER, &characters)
        .replace(INPUT_PLACEHOLDER, input);
    prompt.push_str(DIRECTIVE_SUFFIX);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders_are_filled() {
        for language in [Language::Chinese, Language::English] {
            let prompt = user_prompt(language, "abc", &['a', 'b', 'c']);
            assert!(!prompt.contains(INPUT_PLACEHOLDER));
            assert!(!prompt.contains(CHARACTERS_PLACEHOLDER));
            assert!(prompt.contains(r#"["a","b","c"]"#));
            assert!(prompt.ends_with(" /no_think"));
        }
    }

    #[test]
    fn test_input_with_placeholder_text_is_literal() {
        let prompt = user_prompt(Language::English, "say $split_filter_characters_in_order", &['s']);
        assert!(prompt.contains("input: say $split_filter_characters_in_order"));
    }

    #[test]
    fn test_english_prompt_keeps_worked_examples() {
        let prompt = user_prompt(Language::English, "Hi", &['H', 'i']);
        assert!(prompt.contains("input: zhang 3san feng"));
        assert!(prompt.contains(r#"["z","h","a","n","g","s","a","n","f","e","n","g"]"#));
        assert!(prompt.contains("input: Hi\nhint: Hi, split_characters_in_order: [\"H\",\"i\"]"));
    }

    #[test]
    fn test_chinese_prompt_keeps_worked_example() {
        let prompt = user_prompt(Language::Chinese, "希望", &['希', '望']);
        assert!(prompt.contains("输入：人工智能"));
        assert!(prompt.contains(r#"输入为：希望"#));
        assert!(prompt.contains(r#"split_characters_in_order：["希","望"]"#));
    }

    #[test]
    fn test_system_prompt_matches_language() {
        assert!(system_prompt(Language::Chinese).contains("藏头诗"));
        assert!(system_prompt(Language::English).contains("acrostic"));
    }
}
