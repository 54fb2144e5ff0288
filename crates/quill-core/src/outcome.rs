/// The result of a successful service call, before it is turned into a
/// response by the transport layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The request succeeded and carries data.
    Ok(T),
    /// A new record was created.
    Created(T),
    /// The request succeeded with nothing to return.
    NoContent,
    /// The requested record does not exist.
    NotFound,
}

impl<T> Outcome<T> {
    /// Wraps the payload, or yields `NotFound` when there is none.
    pub fn found(value: Option<T>) -> Self {
        match value {
            Some(value) => Outcome::Ok(value),
            None => Outcome::NotFound,
        }
    }
}

impl<T> Outcome<Vec<T>> {
    /// Turns an empty listing into `NoContent`.
    pub fn listing(items: Vec<T>) -> Self {
        if items.is_empty() {
            Outcome::NoContent
        } else {
            Outcome::Ok(items)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_listing_is_no_content() {
        assert_eq!(Outcome::<Vec<u8>>::listing(vec![]), Outcome::NoContent);
        assert_eq!(Outcome::listing(vec![1]), Outcome::Ok(vec![1]));
    }

    #[test]
    fn found_maps_none_to_not_found() {
        assert_eq!(Outcome::found(Some(1)), Outcome::Ok(1));
        assert_eq!(Outcome::<u8>::found(None), Outcome::NotFound);
    }
}
