//! Word and symbol pools for the insertion strategies

/// Upper bound on the number of symbols inserted in one pass
pub const MAX_INSERTS: usize = 5;

pub const EMOJIS: &[&str] = &[
    "😀", "😂", "🤣", "😊", "😍", "🤔", "😎", "😭", "😡", "👍", "👀", "🙏", "🔥", "✨", "🎉",
    "💯", "🌟", "🍀", "🐶", "🐱", "🌈", "⚡", "❤️", "💡", "🚀",
];

pub const SPECIAL_SYMBOLS: &[&str] = &[
    "~", "!", "@", "#", "$", "%", "^", "&", "*", "+", "=", "|", "★", "☆", "♡", "♪", "※", "◆",
    "●", "▲", "→", "←", "√", "∞", "§", "¤", "·", "…",
];

pub const CHINESE_HOT_WORDS: &[&str] = &[
    "绝绝子", "躺平", "内卷", "破防", "打工人", "凡尔赛", "干饭人", "摆烂", "上头", "社恐",
    "真香", "佛系", "锦鲤", "杠精", "柠檬精", "宝藏", "种草", "拔草", "划水", "摸鱼",
];

pub const ENGLISH_HOT_WORDS: &[&str] = &[
    "yyds", "xswl", "awsl", "nbcs", "u1s1", "dddd", "zqsg", "xdm", "bdjw", "emo", "2333",
    "666", "886", "520", "1314", "OMG", "LOL", "CPU", "PUA", "KPI",
];
