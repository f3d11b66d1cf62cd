// SPDX-License-Identifier: MPL-2.0
use poppo_live::app::{self, Flags, Section};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let section = args
        .opt_value_from_str::<_, String>("--section")
        .unwrap()
        .map(|id| match Section::from_id(&id) {
            Some(section) => section,
            None => {
                eprintln!("Unknown section id: {}", id);
                std::process::exit(2);
            }
        });

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap(),
        section,
        i18n_dir: args.opt_value_from_str("--i18n-dir").unwrap(),
        config_dir: args.opt_value_from_str("--config-dir").unwrap(),
    };

    app::run(flags)
}
