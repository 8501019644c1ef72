/// The mftrim binary, isolated from any config file on the host.
#[macro_export]
macro_rules! mftrim {
    () => {{
        let mut cmd = assert_cmd::Command::cargo_bin("mftrim").unwrap();
        cmd.env_remove("MFTRIM_CONTEXT")
            .env("MFTRIMCFG", "/nonexistent/mftrim_config.yaml");
        cmd
    }};
}
