/// Computes the star rating for a play session.
///
/// Three stars reward a clean run with no hints and at most 15 moves, two
/// stars allow one hint and up to 20 moves, and everything else earns one
/// star. Counters carry the whole session: hints survive a reset, so a
/// hint-assisted run can never climb back to three stars.
///
/// # Example
///
/// ```
/// use solluna_game::star_rating;
///
/// assert_eq!(star_rating(0, 12), 3);
/// assert_eq!(star_rating(1, 18), 2);
/// assert_eq!(star_rating(2, 18), 1);
/// ```
#[must_use]
pub const fn star_rating(hints_used: usize, move_count: usize) -> u8 {
    if hints_used == 0 && move_count <= 15 {
        3
    } else if hints_used <= 1 && move_count <= 20 {
        2
    } else {
        1
    }
}
