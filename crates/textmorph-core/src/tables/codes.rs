//! Latin-script code tables

pub(super) const MORSE: &[(char, &str)] = &[
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('.', ".-.-.-"),
    (',', "--..--"),
    ('?', "..--.."),
    ('\'', ".----."),
    ('!', "-.-.--"),
    ('/', "-..-."),
    ('(', "-.--."),
    (')', "-.--.-"),
    ('&', ".-..."),
    (':', "---..."),
    (';', "-.-.-."),
    ('=', "-...-"),
    ('+', ".-.-."),
    ('-', "-....-"),
    ('_', "..--.-"),
    ('"', ".-..-."),
    ('$', "...-..-"),
    ('@', ".--.-."),
];

// Grade 1 English Braille; digits use the number sign prefix.
pub(super) const BRAILLE: &[(char, &str)] = &[
    ('A', "⠁"),
    ('B', "⠃"),
    ('C', "⠉"),
    ('D', "⠙"),
    ('E', "⠑"),
    ('F', "⠋"),
    ('G', "⠛"),
    ('H', "⠓"),
    ('I', "⠊"),
    ('J', "⠚"),
    ('K', "⠅"),
    ('L', "⠇"),
    ('M', "⠍"),
    ('N', "⠝"),
    ('O', "⠕"),
    ('P', "⠏"),
    ('Q', "⠟"),
    ('R', "⠗"),
    ('S', "⠎"),
    ('T', "⠞"),
    ('U', "⠥"),
    ('V', "⠧"),
    ('W', "⠺"),
    ('X', "⠭"),
    ('Y', "⠽"),
    ('Z', "⠵"),
    ('1', "⠼⠁"),
    ('2', "⠼⠃"),
    ('3', "⠼⠉"),
    ('4', "⠼⠙"),
    ('5', "⠼⠑"),
    ('6', "⠼⠋"),
    ('7', "⠼⠛"),
    ('8', "⠼⠓"),
    ('9', "⠼⠊"),
    ('0', "⠼⠚"),
    (' ', "⠀"),
    ('.', "⠲"),
    (',', "⠂"),
    (';', "⠆"),
    (':', "⠒"),
    ('!', "⠖"),
    ('?', "⠦"),
    ('\'', "⠄"),
    ('-', "⠤"),
    ('(', "⠐⠣"),
    (')', "⠐⠜"),
    ('/', "⠸⠌"),
];

pub(super) const DIGIT_LEET: &[(char, &str)] = &[
    ('0', "〇"),
    ('1', "⒈"),
    ('2', "⒉"),
    ('3', "⒊"),
    ('4', "⒋"),
    ('5', "⒌"),
    ('6', "⒍"),
    ('7', "⒎"),
    ('8', "⒏"),
    ('9', "⒐"),
];

/// Basic leet alphabet; letters without a common substitute map to `None`.
pub(super) fn letter_leet(lower: char) -> Option<&'static str> {
    let replacement = match lower {
        'a' => "4",
        'b' => "8",
        'c' => "(",
        'e' => "3",
        'g' => "6",
        'h' => "#",
        'i' => "1",
        'l' => "|",
        'o' => "0",
        's' => "5",
        't' => "7",
        'x' => "><",
        'z' => "2",
        _ => return None,
    };
    Some(replacement)
}
