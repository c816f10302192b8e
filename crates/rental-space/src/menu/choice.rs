//! Pure interpretation of raw menu input.

/// Lettered actions offered under a property list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAction {
    /// `a`: add to (or remove from) the wishlist.
    Wishlist,
    /// `b`: apply for the property.
    Apply,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListChoice {
    Back,
    Open(usize),
    Action(ListAction),
    InvalidNumber,
    InvalidLetter,
}

/// Answer to a "Property no. (1 - n)" prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexChoice {
    Blank,
    Selected(usize),
    OutOfRange,
    NotANumber,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailChoice {
    Back,
    ToggleWishlist,
    Apply,
    Invalid,
}

pub fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}

/// Maps a 1-based number within `1..=len` to a 0-based index.
pub fn parse_index(input: &str, len: usize) -> IndexChoice {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return IndexChoice::Blank;
    }

    match trimmed.parse::<i32>() {
        Ok(number) if number >= 1 && (number as usize) <= len => {
            IndexChoice::Selected(number as usize - 1)
        }
        Ok(_) => IndexChoice::OutOfRange,
        Err(_) => IndexChoice::NotANumber,
    }
}

pub fn parse_list_choice(input: &str, len: usize) -> ListChoice {
    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case("a") {
        return ListChoice::Action(ListAction::Wishlist);
    }
    if trimmed.eq_ignore_ascii_case("b") {
        return ListChoice::Action(ListAction::Apply);
    }

    match parse_index(trimmed, len) {
        IndexChoice::Blank => ListChoice::Back,
        IndexChoice::Selected(index) => ListChoice::Open(index),
        IndexChoice::OutOfRange => ListChoice::InvalidNumber,
        IndexChoice::NotANumber => ListChoice::InvalidLetter,
    }
}

pub fn parse_detail_choice(input: &str) -> DetailChoice {
    match input.trim() {
        "" => DetailChoice::Back,
        "1" => DetailChoice::ToggleWishlist,
        "2" => DetailChoice::Apply,
        _ => DetailChoice::Invalid,
    }
}
