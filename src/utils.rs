pub struct Sequence {
    pub text: String,
    pub char_vector: Vec<char>,
    pub n_chars: usize,
}

impl Sequence {
    pub fn new(text: &str) -> Self {
        let char_vec = str_to_char_vec(text);
        let char_vec_len = char_vec.len();
        Sequence {
            text: text.to_string(),
            char_vector: char_vec,
            n_chars: char_vec_len,
        }
    }
}

pub fn str_to_char_vec(string: &str) -> Vec<char> {
    string.chars().collect()
}
