//! Reference data for suggestions: people records and static fallbacks.
//!
//! The document store is the source of truth; when it is unreachable the
//! loaders substitute these built-in lists so the form stays usable.
use serde::{Deserialize, Serialize};

/// An actor or director record from the reference store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    /// Popularity metric; zero when the store does not track it.
    #[serde(default)]
    pub films_played: u32,
}

const FALLBACK_ACTORS: [(&str, u32); 20] = [
    ("Tom Hanks", 50),
    ("Leonardo DiCaprio", 30),
    ("Brad Pitt", 45),
    ("Meryl Streep", 60),
    ("Jennifer Lawrence", 25),
    ("Denzel Washington", 40),
    ("Robert De Niro", 80),
    ("Al Pacino", 55),
    ("Johnny Depp", 48),
    ("Sandra Bullock", 35),
    ("George Clooney", 42),
    ("Julia Roberts", 38),
    ("Will Smith", 32),
    ("Emma Stone", 22),
    ("Ryan Gosling", 28),
    ("Scarlett Johansson", 36),
    ("Matt Damon", 47),
    ("Nicole Kidman", 53),
    ("Tom Cruise", 44),
    ("Cate Blanchett", 49),
];

const FALLBACK_DIRECTORS: [&str; 20] = [
    "Steven Spielberg",
    "Christopher Nolan",
    "Martin Scorsese",
    "Quentin Tarantino",
    "James Cameron",
    "Francis Ford Coppola",
    "Stanley Kubrick",
    "Alfred Hitchcock",
    "Ridley Scott",
    "Denis Villeneuve",
    "David Fincher",
    "Spike Lee",
    "Wes Anderson",
    "Tim Burton",
    "Clint Eastwood",
    "Sofia Coppola",
    "Peter Jackson",
    "Kathryn Bigelow",
    "Darren Aronofsky",
    "Guillermo del Toro",
];

/// Built-in actor list used when the reference store is unreachable.
#[must_use]
pub fn fallback_actors() -> Vec<Person> {
    FALLBACK_ACTORS
        .iter()
        .enumerate()
        .map(|(i, (name, films_played))| Person {
            id: (i + 1).to_string(),
            name: (*name).to_string(),
            films_played: *films_played,
        })
        .collect()
}

/// Built-in director list used when the reference store is unreachable.
#[must_use]
pub fn fallback_directors() -> Vec<Person> {
    FALLBACK_DIRECTORS
        .iter()
        .enumerate()
        .map(|(i, name)| Person {
            id: (i + 1).to_string(),
            name: (*name).to_string(),
            films_played: 0,
        })
        .collect()
}

/// Sort people most-popular first. Ties keep their incoming order.
pub fn sort_by_popularity(people: &mut [Person]) {
    people.sort_by(|a, b| b.films_played.cmp(&a.films_played));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_lists_have_twenty_entries_each() {
        assert_eq!(fallback_actors().len(), 20);
        assert_eq!(fallback_directors().len(), 20);
    }

    #[test]
    fn fallback_ids_are_unique() {
        let actors = fallback_actors();
        for (i, person) in actors.iter().enumerate() {
            assert_eq!(person.id, (i + 1).to_string());
        }
    }

    #[test]
    fn sort_by_popularity_is_descending() {
        let mut people = fallback_actors();
        sort_by_popularity(&mut people);
        assert_eq!(people[0].name, "Robert De Niro");
        for pair in people.windows(2) {
            assert!(pair[0].films_played >= pair[1].films_played);
        }
    }

    #[test]
    fn person_deserializes_store_documents() {
        let person: Person =
            serde_json::from_str(r#"{"_id": "abc", "name": "Agnès Varda", "films_played": 24}"#)
                .unwrap();
        assert_eq!(person.id, "abc");
        assert_eq!(person.films_played, 24);

        // Directors collections omit the popularity count.
        let person: Person = serde_json::from_str(r#"{"_id": "d1", "name": "Chantal Akerman"}"#)
            .unwrap();
        assert_eq!(person.films_played, 0);
    }
}
