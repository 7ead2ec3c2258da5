use crate::error::SetupError;

pub type Installer<E> = fn(&E) -> Result<usize, SetupError>;

#[derive(Debug, PartialEq)]
pub enum Outcome {
    Installed(usize),
    Skipped(&'static str),
    Failed(String),
}

pub fn install_each<E>(
    features: &[(&'static str, Installer<E>)],
    env: &E,
) -> Vec<(&'static str, Outcome)> {
    features
        .iter()
        .map(|(feature, install)| {
            let outcome = match install(env) {
                Ok(targets) => Outcome::Installed(targets),
                Err(SetupError::MissingElement(selector)) => Outcome::Skipped(selector),
                Err(error) => Outcome::Failed(error.to_string()),
            };
            (*feature, outcome)
        })
        .collect()
}

/// Hands a mounted host to `render`, which owns feature setup from then on.
/// Without a host the features are installed right away against
/// `detached_env`.
pub fn mount_or_install<R, E, M, D>(
    mounted: Result<R, SetupError>,
    render: M,
    features: &[(&'static str, Installer<E>)],
    detached_env: D,
) -> Result<(), (SetupError, Vec<(&'static str, Outcome)>)>
where
    M: FnOnce(R),
    D: FnOnce() -> E,
{
    match mounted {
        Ok(root) => {
            render(root);
            Ok(())
        }
        Err(error) => Err((error, install_each(features, &detached_env()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Env {
        calls: Cell<usize>,
    }

    fn navbar(env: &Env) -> Result<usize, SetupError> {
        env.calls.set(env.calls.get() + 1);
        Ok(1)
    }

    fn menu(env: &Env) -> Result<usize, SetupError> {
        env.calls.set(env.calls.get() + 1);
        Err(SetupError::MissingElement(".mobile-toggle"))
    }

    fn ripples(env: &Env) -> Result<usize, SetupError> {
        env.calls.set(env.calls.get() + 1);
        Err(SetupError::Js("append failed".to_string()))
    }

    fn cards(env: &Env) -> Result<usize, SetupError> {
        env.calls.set(env.calls.get() + 1);
        Ok(3)
    }

    const FEATURES: [(&str, Installer<Env>); 4] = [
        ("navbar", navbar),
        ("mobile_menu", menu),
        ("ripples", ripples),
        ("card_hover", cards),
    ];

    fn env() -> Env {
        Env {
            calls: Cell::new(0),
        }
    }

    #[test]
    fn failing_feature_does_not_stop_the_rest() {
        let env = env();

        let outcomes = install_each(&FEATURES, &env);

        assert_eq!(env.calls.get(), 4);
        assert_eq!(
            outcomes,
            vec![
                ("navbar", Outcome::Installed(1)),
                ("mobile_menu", Outcome::Skipped(".mobile-toggle")),
                ("ripples", Outcome::Failed("browser call failed: append failed".to_string())),
                ("card_hover", Outcome::Installed(3)),
            ]
        );
    }

    #[test]
    fn features_install_even_when_host_cannot_mount() {
        let rendered = Cell::new(false);

        let result = mount_or_install(
            Err::<(), _>(SetupError::MissingElement("body")),
            |_| rendered.set(true),
            &FEATURES,
            env,
        );

        assert!(!rendered.get());
        let (error, outcomes) = result.expect_err("mount failed");
        assert_eq!(error.to_string(), "no element matches `body`");
        assert_eq!(outcomes.len(), 4);
        assert_eq!(outcomes[0], ("navbar", Outcome::Installed(1)));
        assert_eq!(outcomes[3], ("card_hover", Outcome::Installed(3)));
    }

    #[test]
    fn mounted_host_defers_setup_to_render() {
        let rendered = Cell::new(false);

        let result = mount_or_install(
            Ok::<_, SetupError>("root"),
            |root| rendered.set(root == "root"),
            &FEATURES,
            || -> Env { panic!("no detached setup when mounted") },
        );

        assert!(result.is_ok());
        assert!(rendered.get());
    }
}
