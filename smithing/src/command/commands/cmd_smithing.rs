use async_trait::async_trait;
use itertools::Itertools;
use smithing_core::text::color::NamedColor;
use smithing_core::text::TextComponent;
use smithing_inventory::{Container, PrepareSmithingEvent, SmithingInventory};
use smithing_registry::{IngredientMatcher, RecipeLoadOutcome, CATALOG_PREFIX};
use smithing_world::item::ItemStack;

use crate::command::args::arg_item::ItemArgumentConsumer;
use crate::command::args::{ConsumedArgs, FindArg};
use crate::command::dispatcher::CommandError;
use crate::command::tree::CommandTree;
use crate::command::tree_builder::{argument, literal};
use crate::command::{CommandExecutor, CommandSender};
use crate::server::Server;

const NAMES: [&str; 2] = ["smithing", "nexosmithing"];

const DESCRIPTION: &str = "Reload, list and try out smithing recipes.";

const ARG_TEMPLATE: &str = "template";
const ARG_BASE: &str = "base";
const ARG_ADDITION: &str = "addition";

fn describe_item(item: &ItemStack) -> String {
    match &item.catalog_id {
        Some(id) => format!("{CATALOG_PREFIX}{id}"),
        None => item.material.to_string(),
    }
}

fn describe_matcher(matcher: &IngredientMatcher) -> String {
    match matcher {
        IngredientMatcher::Exact(item) => describe_item(item),
        IngredientMatcher::Material(material) => material.to_string(),
    }
}

struct ReloadExecutor;

#[async_trait]
impl CommandExecutor for ReloadExecutor {
    async fn execute<'a>(
        &self,
        sender: &mut CommandSender<'a>,
        server: &Server,
        _args: &ConsumedArgs,
    ) -> Result<(), CommandError> {
        let report = server.reload_recipes()?;

        for (id, outcome) in &report.outcomes {
            let message = match outcome {
                RecipeLoadOutcome::Registered(key) => {
                    TextComponent::text(format!("Registered {id} as {key}"))
                        .color_named(NamedColor::Green)
                }
                RecipeLoadOutcome::AlreadyExists(_) => {
                    TextComponent::text(format!("Recipe {id} already exists, skipping."))
                        .color_named(NamedColor::Yellow)
                }
                RecipeLoadOutcome::Failed(err) => {
                    TextComponent::text(err.to_string()).color_named(NamedColor::Red)
                }
            };
            sender.send_message(message).await;
        }

        sender
            .send_message(
                TextComponent::text("Smithing recipes reloaded")
                    .color_named(NamedColor::Gold)
                    .add_child(
                        TextComponent::text(format!(
                            " ({} registered, {} skipped, {} failed)",
                            report.registered(),
                            report.skipped(),
                            report.failed()
                        ))
                        .color_named(NamedColor::Gray),
                    ),
            )
            .await;

        Ok(())
    }
}

struct ListExecutor;

#[async_trait]
impl CommandExecutor for ListExecutor {
    async fn execute<'a>(
        &self,
        sender: &mut CommandSender<'a>,
        server: &Server,
        _args: &ConsumedArgs,
    ) -> Result<(), CommandError> {
        // rendered up front, the registry guard must not be held across an await
        let lines: Vec<TextComponent> = server
            .registry
            .read()
            .recipes()
            .enumerate()
            .map(|(i, recipe)| {
                TextComponent::text(format!("{}. {}", i + 1, recipe.key))
                    .color_named(NamedColor::Gold)
                    .add_child(TextComponent::text(format!(
                        ": {} + {} + {} -> {}",
                        describe_matcher(&recipe.template),
                        describe_matcher(&recipe.base),
                        describe_matcher(&recipe.addition),
                        describe_item(&recipe.result),
                    )))
            })
            .collect();

        if lines.is_empty() {
            sender
                .send_message(
                    TextComponent::text("No smithing recipes registered")
                        .color_named(NamedColor::Yellow),
                )
                .await;
            return Ok(());
        }

        sender
            .send_message(
                TextComponent::text(format!("Smithing recipes ({}):", lines.len()))
                    .color_named(NamedColor::Yellow),
            )
            .await;
        for line in lines {
            sender.send_message(line).await;
        }

        Ok(())
    }
}

struct PreviewExecutor;

#[async_trait]
impl CommandExecutor for PreviewExecutor {
    async fn execute<'a>(
        &self,
        sender: &mut CommandSender<'a>,
        server: &Server,
        args: &ConsumedArgs,
    ) -> Result<(), CommandError> {
        let mut inventory = SmithingInventory::default();
        for (slot, name) in [
            (SmithingInventory::TEMPLATE_SLOT, ARG_TEMPLATE),
            (SmithingInventory::BASE_SLOT, ARG_BASE),
            (SmithingInventory::ADDITION_SLOT, ARG_ADDITION),
        ] {
            match ItemArgumentConsumer::find_arg(args, name)? {
                Ok(item) => {
                    inventory.set_item(slot, item.cloned())?;
                }
                Err(token) => {
                    sender
                        .send_message(
                            TextComponent::text(format!("Unknown item: {token}"))
                                .color_named(NamedColor::Red),
                        )
                        .await;
                    return Ok(());
                }
            }
        }

        let mut event = PrepareSmithingEvent::new(inventory);
        let Some(key) = server.prepare_smithing(&mut event) else {
            sender
                .send_message(
                    TextComponent::text("No matching recipe").color_named(NamedColor::Yellow),
                )
                .await;
            return Ok(());
        };
        let Some(result) = event.result else {
            return Err(CommandError::GeneralCommandIssue(format!(
                "Recipe {key} matched without producing a result"
            )));
        };

        sender
            .send_message(
                TextComponent::text(format!("{key} -> {}", describe_item(&result)))
                    .color_named(NamedColor::Green),
            )
            .await;
        if let Some(name) = &result.display_name {
            sender
                .send_message(TextComponent::text("Name: ").add_child(name.clone()))
                .await;
        }
        if result.has_lore() {
            let lore = result.lore.iter().map(TextComponent::plain).join(" / ");
            sender
                .send_message(TextComponent::text(format!("Lore: {lore}")))
                .await;
        }
        if !result.enchantments.is_empty() {
            let enchantments = result
                .enchantments
                .iter()
                .map(|(enchantment, level)| format!("{enchantment} {level}"))
                .join(", ");
            sender
                .send_message(TextComponent::text(format!("Enchantments: {enchantments}")))
                .await;
        }
        if let Some(trim) = &result.trim {
            sender
                .send_message(TextComponent::text(format!(
                    "Trim: {} {}",
                    trim.material, trim.pattern
                )))
                .await;
        }

        Ok(())
    }
}

pub fn init_command_tree() -> CommandTree {
    CommandTree::new(NAMES, DESCRIPTION)
        .with_child(literal("reload").execute(&ReloadExecutor))
        .with_child(literal("list").execute(&ListExecutor))
        .with_child(
            literal("preview").with_child(
                argument(ARG_TEMPLATE, &ItemArgumentConsumer).with_child(
                    argument(ARG_BASE, &ItemArgumentConsumer).with_child(
                        argument(ARG_ADDITION, &ItemArgumentConsumer).execute(&PreviewExecutor),
                    ),
                ),
            ),
        )
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crate::command::tests::run;
    use crate::server::tests::{server, RECIPES};

    const VALID: &str = r#"
        [netherite_relic]
        result = { nexo_item = "relic_blade" }
        template = { minecraft_item = "netherite_upgrade_smithing_template" }
        base = { minecraft_item = "diamond_sword" }
        addition = { nexo_item = "relic_shard" }
        copy_trim = false
    "#;

    #[tokio::test]
    async fn reload_reports_each_recipe() {
        let server = server("cmd-reload", RECIPES);
        let output = run(&server, "smithing reload").await;
        assert_eq!(
            output,
            [
                "Registered netherite_relic as smithing:netherite_relic",
                "Invalid recipe configuration for broken: neither nexo_item nor minecraft_item is set for broken.base",
                "Smithing recipes reloaded (1 registered, 0 skipped, 1 failed)",
            ]
        );
    }

    #[tokio::test]
    async fn alias_reloads_too() {
        let server = server("cmd-alias", VALID);
        let output = run(&server, "nexosmithing reload").await;
        assert_eq!(
            output.last().map(String::as_str),
            Some("Smithing recipes reloaded (1 registered, 0 skipped, 0 failed)")
        );
        assert_eq!(server.registry.read().len(), 1);
    }

    #[tokio::test]
    async fn reload_error_keeps_registry() {
        let server = server("cmd-reload-error", VALID);
        run(&server, "smithing reload").await;

        let server = crate::server::Server {
            recipes_path: std::env::temp_dir(),
            ..server
        };
        let output = run(&server, "smithing reload").await;
        assert_eq!(
            output,
            ["Unknown internal error occurred while running command. Please see server log"]
        );
        assert_eq!(server.registry.read().len(), 1);
    }

    #[tokio::test]
    async fn list_in_priority_order() {
        let server = server("cmd-list", "");
        assert_eq!(
            run(&server, "smithing list").await,
            ["No smithing recipes registered"]
        );

        let second = VALID.replace("netherite_relic", "echo_relic");
        let path = std::env::temp_dir().join(format!(
            "smithing-cmd-list-two-{}.toml",
            std::process::id()
        ));
        fs::write(&path, format!("{VALID}\n{second}")).unwrap();
        let server = crate::server::Server {
            recipes_path: path,
            ..server
        };
        server.reload_recipes().unwrap();

        let output = run(&server, "smithing list").await;
        assert_eq!(
            output,
            [
                "Smithing recipes (2):",
                "1. smithing:netherite_relic: minecraft:netherite_upgrade_smithing_template + minecraft:diamond_sword + nexo:relic_shard -> nexo:relic_blade",
                "2. smithing:echo_relic: minecraft:netherite_upgrade_smithing_template + minecraft:diamond_sword + nexo:relic_shard -> nexo:relic_blade",
            ]
        );
    }

    #[tokio::test]
    async fn preview_shows_merged_result() {
        let server = server("cmd-preview", VALID);
        server.reload_recipes().unwrap();

        let output = run(
            &server,
            "smithing preview netherite_upgrade_smithing_template diamond_sword nexo:relic_shard",
        )
        .await;
        assert_eq!(
            output,
            [
                "smithing:netherite_relic -> nexo:relic_blade",
                "Name: Relic Blade",
                "Lore: Forged anew",
            ]
        );
    }

    #[tokio::test]
    async fn preview_without_match() {
        let server = server("cmd-preview-miss", VALID);
        server.reload_recipes().unwrap();

        let empty_slot = run(
            &server,
            "smithing preview netherite_upgrade_smithing_template diamond_sword -",
        )
        .await;
        assert_eq!(empty_slot, ["No matching recipe"]);

        let vanilla_shard = run(
            &server,
            "smithing preview netherite_upgrade_smithing_template diamond_sword echo_shard",
        )
        .await;
        assert_eq!(vanilla_shard, ["No matching recipe"]);

        let unknown = run(&server, "smithing preview nexo:nope diamond_sword -").await;
        assert_eq!(unknown, ["Unknown item: nexo:nope"]);
    }
}
