use needle::{Arguments, Class, Config, Container, Dependencies, InstantiateErrorKind, Registry, ResolveErrorKind, TypeInfo};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct Logger {
    lines: Mutex<Vec<String>>,
}

impl Logger {
    fn log(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_owned());
    }
}

struct Service {
    logger: Arc<Logger>,
    args: (u8, u8, u8),
}

fn service_class() -> Class<Service> {
    Class::new("function Service($logger) { this.logger = $logger; }", |mut deps: Dependencies| {
        Ok::<_, InstantiateErrorKind>(Service {
            logger: deps.next()?,
            args: (0, 0, 0),
        })
    })
    .unwrap()
    .with_initializer(|service: &mut Service, mut args: Arguments| {
        if !args.is_empty() {
            service.args = (args.next()?, args.next()?, args.next()?);
        }
        service.logger.log("initialized");
        Ok::<_, InstantiateErrorKind>(())
    })
}

#[test]
fn test_logger_injected_into_service() {
    let logger = Arc::new(Logger::default());
    let container = Container::default();
    container.register_injector_rc("logger", logger.clone());

    let service = container.instantiate(&service_class(), ()).unwrap();

    assert!(Arc::ptr_eq(&service.logger, &logger));
    assert_eq!(*logger.lines.lock().unwrap(), ["initialized"]);
}

#[test]
fn test_initializer_receives_arguments() {
    let container = Container::new(Registry::new().provide("logger", Logger::default()));

    let service = container.instantiate(&service_class(), (1u8, 2u8, 3u8)).unwrap();
    assert_eq!(service.args, (1, 2, 3));
}

#[test]
fn test_registered_value_is_returned_by_get_injectors() {
    let container = Container::default();
    let logger = Arc::new(Logger::default());

    container.register_injector_rc("logger", logger.clone());
    container.register_injector("retries", 3u8);

    let injectors = container.get_injectors();
    assert_eq!(injectors.len(), 2);
    assert!(Arc::ptr_eq(&injectors["logger"].downcast::<Logger>().unwrap(), &logger));
    assert_eq!(*injectors["retries"].downcast::<u8>().unwrap(), 3);
}

#[test]
fn test_missing_logger_is_partial_or_strict() {
    let class = Class::new("function Service($logger)", |mut deps: Dependencies| {
        Ok::<_, InstantiateErrorKind>(deps.next_if::<Logger>().is_some())
    })
    .unwrap();

    let permissive = Container::default();
    assert!(!permissive.instantiate(&class, ()).unwrap());

    let strict = Container::with_config(Registry::new(), Config::strict());
    assert!(matches!(
        strict.instantiate(&class, ()),
        Err(InstantiateErrorKind::Resolve(ResolveErrorKind::NoInjector { .. }))
    ));
}

#[test]
fn test_instance_type_matches_native() {
    let container = Container::new(Registry::new().provide("logger", Logger::default()));

    let service = container.instantiate(&service_class(), ()).unwrap();
    let native = Service {
        logger: Arc::new(Logger::default()),
        args: (0, 0, 0),
    };

    assert_eq!(TypeInfo::of_val(&service), TypeInfo::of_val(&native));
    assert_eq!(service_class().type_info(), TypeInfo::of::<Service>());
}

#[test]
fn test_container_shared_between_threads() {
    let container = Container::default();
    let class = service_class();

    let handle = std::thread::spawn({
        let container = container.clone();
        move || {
            container.register_injector("logger", Logger::default());
        }
    });
    handle.join().unwrap();

    let service = container.instantiate(&class, ()).unwrap();
    assert_eq!(*service.logger.lines.lock().unwrap(), ["initialized"]);
}
