//! Initial people loaded into a fresh store.

use phonebook_people::NewPerson;

/// The default directory of people the server starts with.
pub fn default_people() -> Vec<NewPerson> {
    vec![
        NewPerson::named("Clementine Bauch")
            .with_phone("1-770-736-8031 x56442")
            .with_age(42)
            .with_address("Kulas Light", "Gwenborough"),
        NewPerson::named("Leanne Graham")
            .with_age(17)
            .with_address("Victor Plains", "Wisokyburgh"),
        NewPerson::named("Ervin Howell")
            .with_phone("010-692-6593 x09125")
            .with_age(67)
            .with_address("Douglas Extension", "McKenziehaven"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_people_have_unique_names() {
        let people = default_people();
        let mut names: Vec<_> = people.iter().map(|p| p.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), people.len());
    }
}
