use serde::{Deserialize, Serialize};
use crate::utils::constants::NEVER_HANGOUT;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Friend {
    pub id: u32,
    pub name: String,
    /// Texto libre ("Yesterday", "Never", ...)
    pub last_hangout: String,
    pub initial: String,
    pub email: String,
}

impl Friend {
    /// Amigos iniciales del dashboard (datos mock)
    pub fn seed() -> Vec<Friend> {
        vec![
            Friend {
                id: 1,
                name: "Selina".to_string(),
                last_hangout: "Yesterday".to_string(),
                initial: "S".to_string(),
                email: "selina@example.com".to_string(),
            },
            Friend {
                id: 2,
                name: "Cindy".to_string(),
                last_hangout: "Yesterday".to_string(),
                initial: "C".to_string(),
                email: "cindy@example.com".to_string(),
            },
        ]
    }

    /// Crear amigo a partir de su email: nombre = parte local capitalizada
    pub fn from_email(id: u32, email: &str) -> Friend {
        let local = email.split('@').next().unwrap_or_default();
        let initial = capitalize_first(local.chars().next());
        let rest: String = local.chars().skip(1).collect();

        Friend {
            id,
            name: format!("{}{}", initial, rest),
            last_hangout: NEVER_HANGOUT.to_string(),
            initial,
            email: email.to_string(),
        }
    }
}

// Un carácter puede expandirse a varios al pasar a mayúscula (p.ej. 'ß' -> "SS")
fn capitalize_first(c: Option<char>) -> String {
    c.map(|c| c.to_uppercase().collect()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_selina_and_cindy() {
        let friends = Friend::seed();
        assert_eq!(friends.len(), 2);
        assert_eq!(friends[0].name, "Selina");
        assert_eq!(friends[1].name, "Cindy");
        assert!(friends.iter().all(|f| f.last_hangout == "Yesterday"));
    }

    #[test]
    fn derives_name_and_initial_from_local_part() {
        let friend = Friend::from_email(3, "jane@x.com");
        assert_eq!(friend.name, "Jane");
        assert_eq!(friend.initial, "J");
        assert_eq!(friend.last_hangout, "Never");
        assert_eq!(friend.email, "jane@x.com");
    }

    #[test]
    fn email_without_at_uses_whole_string() {
        let friend = Friend::from_email(1, "bob");
        assert_eq!(friend.name, "Bob");
        assert_eq!(friend.initial, "B");
    }

    #[test]
    fn empty_local_part_gives_empty_name() {
        let friend = Friend::from_email(1, "@x.com");
        assert_eq!(friend.name, "");
        assert_eq!(friend.initial, "");
        assert_eq!(friend.email, "@x.com");
    }

    #[test]
    fn keeps_rest_of_local_part_untouched() {
        let friend = Friend::from_email(7, "mary.ann@x.com");
        assert_eq!(friend.name, "Mary.ann");
        assert_eq!(friend.initial, "M");
    }
}
