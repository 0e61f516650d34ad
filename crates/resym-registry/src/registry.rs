//! Symbol class registry
//!
//! Provides [`SymbolRegistry`] for registering resource repositories and
//! looking up generated class definitions by name.

use parking_lot::RwLock;
use resym_bundle::{
    is_symbol_class_name, package_prefix, ClassBytes, GeneratorFactory, IdentifierContext,
    Namespace, RepositoryHandle, RepositoryId, RepositoryResolver, SymbolGenerator,
};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Registry errors
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// More than one live repository claims the package of the requested
    /// class. At most one symbol definition may exist per resolution
    /// domain, so no generator is picked; the configuration has to be
    /// corrected by a human.
    #[error("class {class_name} could not be loaded because of package name collision between libraries claiming '{package}'")]
    PackageCollision {
        /// The class whose resolution was aborted
        class_name: String,
        /// The package claimed by multiple repositories
        package: String,
    },
}

/// Per-repository registration record
///
/// Created the first time a repository is registered; the generator and
/// namespace binding are fixed at that point. Only the claimed-package set
/// grows on re-registration.
struct RepositoryInfo {
    generator: Arc<dyn SymbolGenerator>,
    namespace: Namespace,
    packages: HashSet<String>,
}

/// Mutable registry state behind one lock
///
/// The package cache is derived state: outside of a mutation it always
/// equals the union of all live `RepositoryInfo::packages` sets. Every
/// mutation rebuilds it before releasing the write lock.
#[derive(Default)]
struct RegistryState {
    repositories: HashMap<RepositoryId, RepositoryInfo>,
    packages: HashSet<String>,
}

impl RegistryState {
    fn rebuild_package_cache(&mut self) {
        let rebuilt: HashSet<String> = self
            .repositories
            .values()
            .flat_map(|info| info.packages.iter().cloned())
            .collect();
        self.packages = rebuilt;
    }
}

/// Module-wide registry for symbol class lookup
///
/// Registration and lookup are mutually exclusive with respect to the
/// shared state: the cache rebuild is a read-then-replace sequence and runs
/// entirely under the write lock.
pub struct SymbolRegistry {
    state: RwLock<RegistryState>,
    factory: Arc<dyn GeneratorFactory>,
}

impl SymbolRegistry {
    /// Create an empty registry using `factory` for generator construction
    #[must_use]
    pub fn new(factory: Arc<dyn GeneratorFactory>) -> Self {
        Self {
            state: RwLock::new(RegistryState::default()),
            factory,
        }
    }

    /// Register a repository as the owner of `package_name`
    ///
    /// The first registration for a repository constructs its generator,
    /// bound to `repo`, `ids`, and `namespace`; that binding is never
    /// updated by later calls. Registration is additive: re-registering an
    /// already-claimed package is a no-op in observable behavior, and an
    /// absent or empty package name is silently ignored.
    pub fn add_library(
        &self,
        repo: &RepositoryHandle,
        ids: &IdentifierContext,
        package_name: Option<&str>,
        namespace: Namespace,
    ) {
        let Some(package) = package_name.filter(|p| !p.is_empty()) else {
            return;
        };

        let mut state = self.state.write();
        let info = state
            .repositories
            .entry(repo.id())
            .or_insert_with(|| RepositoryInfo {
                generator: self.factory.create(repo, ids, &namespace),
                namespace,
                packages: HashSet::new(),
            });
        info.packages.insert(package.to_string());
        state.rebuild_package_cache();

        tracing::debug!("registered package '{}' for {}", package, repo);
    }

    /// Look up a generated class definition for `class_name`, if possible
    ///
    /// Ordinary misses (ineligible name, unknown package, no live
    /// generator) return `Ok(None)` and are part of normal delegation. A
    /// package claimed by more than one live repository is a fatal
    /// [`RegistryError::PackageCollision`]; no generator is picked.
    pub fn find_class_definition(
        &self,
        class_name: &str,
        repositories: &dyn RepositoryResolver,
    ) -> Result<Option<ClassBytes>, RegistryError> {
        if !is_symbol_class_name(class_name) {
            return Ok(None);
        }
        let package = package_prefix(class_name);

        let generator = {
            let state = self.state.read();
            if !state.packages.contains(package) {
                return Ok(None);
            }

            let namespace = Namespace::from_package(package);
            let handles = repositories.repositories_for(&namespace);

            let mut selected: Option<Arc<dyn SymbolGenerator>> = None;
            for handle in &handles {
                let Some(info) = state.repositories.get(&handle.id()) else {
                    continue;
                };
                if selected.replace(Arc::clone(&info.generator)).is_some() {
                    tracing::error!(
                        "package name collision between libraries claiming '{}' while loading {}",
                        package,
                        class_name
                    );
                    return Err(RegistryError::PackageCollision {
                        class_name: class_name.to_string(),
                        package: package.to_string(),
                    });
                }
            }
            selected
        };

        // Generator invocation happens outside the registry lock.
        match generator {
            Some(generator) => Ok(generator.generate(class_name)),
            None => Ok(None),
        }
    }

    /// Drop every registration and reset the package cache
    ///
    /// Last-resort recovery for suspected desynchronization between the
    /// registry and downstream identifier-assignment state, which shows up
    /// as spurious field-not-found failures during rendering.
    pub fn clear_cache(&self) {
        let mut state = self.state.write();
        state.repositories.clear();
        state.rebuild_package_cache();

        tracing::debug!("symbol registry cleared");
    }

    /// Retire a repository and drop its package claims
    ///
    /// Explicit lifecycle management: callers retire a repository when its
    /// bundle goes away, rather than relying on reclamation timing.
    pub fn remove_repository(&self, repo: &RepositoryHandle) {
        let mut state = self.state.write();
        if state.repositories.remove(&repo.id()).is_some() {
            state.rebuild_package_cache();
            tracing::debug!("removed {}", repo);
        }
    }

    /// All packages currently claimed by live repositories
    #[must_use]
    pub fn known_packages(&self) -> Vec<String> {
        let state = self.state.read();
        let mut packages: Vec<String> = state.packages.iter().cloned().collect();
        packages.sort_unstable();
        packages
    }

    /// Number of registered repositories
    #[must_use]
    pub fn repository_count(&self) -> usize {
        self.state.read().repositories.len()
    }

    /// Whether `repo` is currently registered
    #[must_use]
    pub fn contains(&self, repo: &RepositoryHandle) -> bool {
        self.state.read().repositories.contains_key(&repo.id())
    }

    /// Namespace bound to `repo` at its first registration
    #[must_use]
    pub fn namespace_of(&self, repo: &RepositoryHandle) -> Option<Namespace> {
        self.state
            .read()
            .repositories
            .get(&repo.id())
            .map(|info| info.namespace.clone())
    }
}

impl std::fmt::Debug for SymbolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("SymbolRegistry")
            .field("repositories", &state.repositories.len())
            .field("packages", &state.packages.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Generator that answers every eligible name with the name's bytes
    struct EchoGenerator {
        repo_name: String,
    }

    impl SymbolGenerator for EchoGenerator {
        fn generate(&self, class_name: &str) -> Option<ClassBytes> {
            Some(ClassBytes::new(
                format!("{}:{}", self.repo_name, class_name).into_bytes(),
            ))
        }
    }

    /// Factory counting how many generators it constructed
    #[derive(Default)]
    struct CountingFactory {
        created: AtomicUsize,
    }

    impl GeneratorFactory for CountingFactory {
        fn create(
            &self,
            repo: &RepositoryHandle,
            _ids: &IdentifierContext,
            _namespace: &Namespace,
        ) -> Arc<dyn SymbolGenerator> {
            self.created.fetch_add(1, Ordering::SeqCst);
            Arc::new(EchoGenerator {
                repo_name: repo.name().to_string(),
            })
        }
    }

    /// Resolver returning a fixed handle list for every namespace
    struct StaticResolver {
        handles: Vec<RepositoryHandle>,
    }

    impl RepositoryResolver for StaticResolver {
        fn repositories_for(&self, _namespace: &Namespace) -> Vec<RepositoryHandle> {
            self.handles.clone()
        }
    }

    fn registry_with_factory() -> (SymbolRegistry, Arc<CountingFactory>) {
        let factory = Arc::new(CountingFactory::default());
        (SymbolRegistry::new(factory.clone()), factory)
    }

    fn register(registry: &SymbolRegistry, repo: &RepositoryHandle, package: &str) {
        registry.add_library(
            repo,
            &IdentifierContext::dynamic(),
            Some(package),
            Namespace::from_package(package),
        );
    }

    #[test]
    fn registered_package_resolves_outer_and_inner_classes() {
        let (registry, _) = registry_with_factory();
        let repo = RepositoryHandle::new("lib");
        register(&registry, &repo, "com.example");
        let resolver = StaticResolver {
            handles: vec![repo],
        };

        let outer = registry
            .find_class_definition("com.example.R", &resolver)
            .unwrap();
        let inner = registry
            .find_class_definition("com.example.R$string", &resolver)
            .unwrap();

        assert_eq!(
            outer.unwrap().as_slice(),
            b"lib:com.example.R".as_slice()
        );
        assert_eq!(
            inner.unwrap().as_slice(),
            b"lib:com.example.R$string".as_slice()
        );
    }

    #[test]
    fn ineligible_name_misses_without_touching_cache() {
        let (registry, _) = registry_with_factory();
        let repo = RepositoryHandle::new("lib");
        register(&registry, &repo, "com.example");
        let resolver = StaticResolver {
            handles: vec![repo],
        };

        let result = registry
            .find_class_definition("com.example.Rfoo", &resolver)
            .unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn unknown_package_misses() {
        let (registry, _) = registry_with_factory();
        let repo = RepositoryHandle::new("lib");
        register(&registry, &repo, "com.example");
        let resolver = StaticResolver {
            handles: vec![repo],
        };

        let result = registry
            .find_class_definition("com.other.R", &resolver)
            .unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn empty_package_registration_is_a_no_op() {
        let (registry, factory) = registry_with_factory();
        let repo = RepositoryHandle::new("lib");

        registry.add_library(
            &repo,
            &IdentifierContext::dynamic(),
            None,
            Namespace::from_package("com.example"),
        );
        registry.add_library(
            &repo,
            &IdentifierContext::dynamic(),
            Some(""),
            Namespace::from_package("com.example"),
        );

        assert_eq!(registry.repository_count(), 0);
        assert_eq!(factory.created.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn generator_is_constructed_once_per_repository() {
        let (registry, factory) = registry_with_factory();
        let repo = RepositoryHandle::new("lib");

        register(&registry, &repo, "com.example");
        register(&registry, &repo, "com.example");
        register(&registry, &repo, "com.example.feature");

        assert_eq!(factory.created.load(Ordering::SeqCst), 1);
        assert_eq!(
            registry.known_packages(),
            vec![
                "com.example".to_string(),
                "com.example.feature".to_string()
            ]
        );
    }

    #[test]
    fn namespace_binding_is_fixed_at_first_registration() {
        let (registry, _) = registry_with_factory();
        let repo = RepositoryHandle::new("lib");

        register(&registry, &repo, "com.example");
        registry.add_library(
            &repo,
            &IdentifierContext::dynamic(),
            Some("com.other"),
            Namespace::from_package("com.other"),
        );

        assert_eq!(
            registry.namespace_of(&repo),
            Some(Namespace::from_package("com.example"))
        );
    }

    #[test]
    fn colliding_packages_fail_hard() {
        let (registry, _) = registry_with_factory();
        let a = RepositoryHandle::new("lib-a");
        let b = RepositoryHandle::new("lib-b");
        register(&registry, &a, "com.example");
        register(&registry, &b, "com.example");
        let resolver = StaticResolver {
            handles: vec![a, b],
        };

        let result = registry.find_class_definition("com.example.R", &resolver);

        assert!(matches!(
            result,
            Err(RegistryError::PackageCollision { .. })
        ));
    }

    #[test]
    fn collision_requires_both_repositories_live() {
        let (registry, _) = registry_with_factory();
        let a = RepositoryHandle::new("lib-a");
        let b = RepositoryHandle::new("lib-b");
        register(&registry, &a, "com.example");
        register(&registry, &b, "com.example");

        // Only one of the claimants is live in the requested namespace.
        let resolver = StaticResolver {
            handles: vec![a],
        };

        let result = registry
            .find_class_definition("com.example.R", &resolver)
            .unwrap();

        assert_eq!(
            result.unwrap().as_slice(),
            b"lib-a:com.example.R".as_slice()
        );
    }

    #[test]
    fn unregistered_handles_are_skipped() {
        let (registry, _) = registry_with_factory();
        let registered = RepositoryHandle::new("lib");
        let stranger = RepositoryHandle::new("stranger");
        register(&registry, &registered, "com.example");
        let resolver = StaticResolver {
            handles: vec![stranger, registered],
        };

        let result = registry
            .find_class_definition("com.example.R", &resolver)
            .unwrap();

        assert_eq!(
            result.unwrap().as_slice(),
            b"lib:com.example.R".as_slice()
        );
    }

    #[test]
    fn clear_cache_forgets_everything() {
        let (registry, _) = registry_with_factory();
        let repo = RepositoryHandle::new("lib");
        register(&registry, &repo, "com.example");
        let resolver = StaticResolver {
            handles: vec![repo.clone()],
        };

        registry.clear_cache();

        let result = registry
            .find_class_definition("com.example.R", &resolver)
            .unwrap();
        assert!(result.is_none());
        assert_eq!(registry.repository_count(), 0);
        assert!(!registry.contains(&repo));
    }

    #[test]
    fn re_registration_after_clear_restores_resolution() {
        let (registry, factory) = registry_with_factory();
        let repo = RepositoryHandle::new("lib");
        register(&registry, &repo, "com.example");
        registry.clear_cache();
        register(&registry, &repo, "com.example");
        let resolver = StaticResolver {
            handles: vec![repo],
        };

        let result = registry
            .find_class_definition("com.example.R", &resolver)
            .unwrap();

        assert!(result.is_some());
        // A fresh generator is constructed for the new registration.
        assert_eq!(factory.created.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn removing_a_repository_only_affects_its_packages() {
        let (registry, _) = registry_with_factory();
        let a = RepositoryHandle::new("lib-a");
        let b = RepositoryHandle::new("lib-b");
        register(&registry, &a, "com.a");
        register(&registry, &b, "com.b");

        registry.remove_repository(&a);

        let resolver_a = StaticResolver {
            handles: vec![a.clone()],
        };
        let resolver_b = StaticResolver {
            handles: vec![b],
        };
        assert!(registry
            .find_class_definition("com.a.R", &resolver_a)
            .unwrap()
            .is_none());
        assert!(registry
            .find_class_definition("com.b.R", &resolver_b)
            .unwrap()
            .is_some());
        assert!(!registry.contains(&a));
        assert_eq!(registry.known_packages(), vec!["com.b".to_string()]);
    }

    #[test]
    fn removing_an_unknown_repository_is_harmless() {
        let (registry, _) = registry_with_factory();
        let repo = RepositoryHandle::new("lib");
        register(&registry, &repo, "com.example");

        registry.remove_repository(&RepositoryHandle::new("stranger"));

        assert_eq!(registry.repository_count(), 1);
    }
}
