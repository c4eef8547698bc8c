// 動作環境の判別
// リリースビルドでは指定がない場合に本番環境とみなす

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

pub fn which() -> Environment {
    #[cfg(debug_assertions)]
    let default_env = Environment::Development;
    #[cfg(not(debug_assertions))]
    let default_env = Environment::Production;

    match std::env::var("ENV") {
        Err(_) => default_env,
        Ok(v) => match v.as_str() {
            "production" => Environment::Production,
            _ => Environment::Development,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ENV はプロセス全体で共有されるため、ひとつのテストで順に検証する
    #[test]
    fn environment_is_selected_by_env_var() {
        std::env::set_var("ENV", "production");
        assert_eq!(which(), Environment::Production);

        std::env::set_var("ENV", "staging");
        assert_eq!(which(), Environment::Development);

        std::env::remove_var("ENV");
    }
}
