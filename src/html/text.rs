use scraper::ElementRef;

/// Concatenated text of every descendant text node
pub fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Element text with newlines turned into spaces
pub fn single_line_text(element: ElementRef<'_>) -> String {
    text_of(element).replace('\n', " ")
}

/// Element text split into whitespace-delimited tokens
pub fn text_tokens(element: ElementRef<'_>) -> Vec<String> {
    text_of(element)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
