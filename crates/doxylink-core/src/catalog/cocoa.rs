//! Foundation and AppKit symbol tables
//!
//! Pure data. Order inside a table does not affect matching.

pub const FOUNDATION_CLASS_URL: &str =
    "http://developer.apple.com/documentation/Cocoa/Reference/Foundation/Classes/{symbol}_Class/index";

pub const FOUNDATION_PROTOCOL_URL: &str =
    "http://developer.apple.com/documentation/Cocoa/Reference/Foundation/Protocols/{symbol}_Protocol/index";

pub const APPKIT_CLASS_URL: &str =
    "http://developer.apple.com/documentation/Cocoa/Reference/ApplicationKit/Classes/{symbol}_Class/index";

pub const APPKIT_PROTOCOL_URL: &str =
    "http://developer.apple.com/documentation/Cocoa/Reference/ApplicationKit/Protocols/{symbol}_Protocol/index";

pub const FOUNDATION_CLASSES: &[&str] = &[
    "NSAppleEventDescriptor",
    "NSAppleEventManager",
    "NSAppleScript",
    "NSArchiver",
    "NSArray",
    "NSAssertionHandler",
    "NSAttributedString",
    "NSAutoreleasePool",
    "NSBundle",
    "NSCachedURLResponse",
    "NSCalendarDate",
    "NSCharacterSet",
    "NSClassDescription",
    "NSCloneCommand",
    "NSCloseCommand",
    "NSCoder",
    "NSConditionLock",
    "NSConnection",
    "NSCountCommand",
    "NSCountedSet",
    "NSCreateCommand",
    "NSData",
    "NSDate",
    "NSDateFormatter",
    "NSDecimalNumber",
    "NSDecimalNumberHandler",
    "NSDeleteCommand",
    "NSDeserializer",
    "NSDictionary",
    "NSDirectoryEnumerator",
    "NSDistantObject",
    "NSDistantObjectRequest",
    "NSDistributedLock",
    "NSDistributedNotificationCenter",
    "NSEnumerator",
    "NSError",
    "NSException",
    "NSExistsCommand",
    "NSFileHandle",
    "NSFileManager",
    "NSFormatter",
    "NSGetCommand",
    "NSHTTPCookie",
    "NSHTTPCookieStorage",
    "NSHTTPURLResponse",
    "NSHost",
    "NSIndexSet",
    "NSIndexSpecifier",
    "NSInputStream",
    "NSInvocation",
    "NSKeyedArchiver",
    "NSKeyedUnarchiver",
    "NSLock",
    "NSLogicalTest",
    "NSMachBootstrapServer",
    "NSMachPort",
    "NSMessagePort",
    "NSMessagePortNameServer",
    "NSMethodSignature",
    "NSMiddleSpecifier",
    "NSMoveCommand",
    "NSMutableArray",
    "NSMutableAttributedString",
    "NSMutableCharacterSet",
    "NSMutableData",
    "NSMutableDictionary",
    "NSMutableIndexSet",
    "NSMutableSet",
    "NSMutableString",
    "NSMutableURLRequest",
    "NSNameSpecifier",
    "NSNetService",
    "NSNetServiceBrowser",
    "NSNotification",
    "NSNotificationCenter",
    "NSNotificationQueue",
    "NSNull",
    "NSNumber",
    "NSNumberFormatter",
    "NSObject",
    "NSOutputStream",
    "NSPipe",
    "NSPort",
    "NSPortCoder",
    "NSPortMessage",
    "NSPortNameServer",
    "NSPositionalSpecifier",
    "NSProcessInfo",
    "NSPropertyListSerialization",
    "NSPropertySpecifier",
    "NSProtocolChecker",
    "NSProxy",
    "NSQuitCommand",
    "NSRandomSpecifier",
    "NSRangeSpecifier",
    "NSRecursiveLock",
    "NSRelativeSpecifier",
    "NSRunLoop",
    "NSScanner",
    "NSScriptClassDescription",
    "NSScriptCoercionHandler",
    "NSScriptCommand",
    "NSScriptCommandDescription",
    "NSScriptExecutionContext",
    "NSScriptObjectSpecifier",
    "NSScriptSuiteRegistry",
    "NSScriptWhoseTest",
    "NSSerializer",
    "NSSet",
    "NSSetCommand",
    "NSSocketPort",
    "NSSocketPortNameServer",
    "NSSortDescriptor",
    "NSSpecifierTest",
    "NSSpellServer",
    "NSStream",
    "NSString",
    "NSTask",
    "NSThread",
    "NSTimeZone",
    "NSTimer",
    "NSURL",
    "NSURLAuthenticationChallenge",
    "NSURLCache",
    "NSURLConnection",
    "NSURLCredential",
    "NSURLCredentialStorage",
    "NSURLDownload",
    "NSURLHandle",
    "NSURLProtectionSpace",
    "NSURLProtocol",
    "NSURLRequest",
    "NSURLResponse",
    "NSUnarchiver",
    "NSUndoManager",
    "NSUniqueIDSpecifier",
    "NSUserDefaults",
    "NSValue",
    "NSValueTransformer",
    "NSWhoseSpecifier",
    "NSXMLParser",
];

pub const FOUNDATION_PROTOCOLS: &[&str] = &[
    "NSCoding",
    "NSComparisonMethods",
    "NSConnectionDelegate",
    "NSCopying",
    "NSDecimalNumberBehaviors",
    "NSDiscardableContent",
    "NSFastEnumeration",
    "NSKeyValueCoding",
    "NSKeyValueObserving",
    "NSKeyedArchiverDelegate",
    "NSKeyedUnarchiverDelegate",
    "NSLocking",
    "NSMachPortDelegate",
    "NSMutableCopying",
    "NSNetServiceBrowserDelegate",
    "NSNetServiceDelegate",
    "NSPortDelegate",
    "NSScriptKeyValueCoding",
    "NSScriptObjectSpecifiers",
    "NSSpellServerDelegate",
    "NSStreamDelegate",
    "NSURLAuthenticationChallengeSender",
    "NSURLHandleClient",
    "NSURLProtocolClient",
    "NSXMLParserDelegate",
];

pub const APPKIT_CLASSES: &[&str] = &[
    "NSATSTypesetter",
    "NSActionCell",
    "NSAffineTransform",
    "NSAlert",
    "NSAppleScript Additions",
    "NSApplication",
    "NSArrayController",
    "NSBezierPath",
    "NSBitmapImageRep",
    "NSBox",
    "NSBrowser",
    "NSBrowserCell",
    "NSButton",
    "NSButtonCell",
    "NSCachedImageRep",
    "NSCell",
    "NSClipView",
    "NSColor",
    "NSColorList",
    "NSColorPanel",
    "NSColorPicker",
    "NSColorWell",
    "NSComboBox",
    "NSComboBoxCell",
    "NSControl",
    "NSController",
    "NSCursor",
    "NSCustomImageRep",
    "NSDocument",
    "NSDocumentController",
    "NSDrawer",
    "NSEPSImageRep",
    "NSEvent",
    "NSFileWrapper",
    "NSFont",
    "NSFontDescriptor",
    "NSFontManager",
    "NSFontPanel",
    "NSForm",
    "NSFormCell",
    "NSGlyphGenerator",
    "NSGlyphInfo",
    "NSGraphicsContext",
    "NSHelpManager",
    "NSImage",
    "NSImageCell",
    "NSImageRep",
    "NSImageView",
    "NSInputManager",
    "NSInputServer",
    "NSLayoutManager",
    "NSMatrix",
    "NSMenu",
    "NSMenuItem",
    "NSMenuItemCell",
    "NSMenuView",
    "NSMovie",
    "NSMovieView",
    "NSMutableParagraphStyle",
    "NSNib",
    "NSNibConnector",
    "NSNibControlConnector",
    "NSNibOutletConnector",
    "NSObjectController",
    "NSOpenGLContext",
    "NSOpenGLPixelBuffer",
    "NSOpenGLPixelFormat",
    "NSOpenGLView",
    "NSOpenPanel",
    "NSOutlineView",
    "NSPDFImageRep",
    "NSPICTImageRep",
    "NSPageLayout",
    "NSPanel",
    "NSParagraphStyle",
    "NSPasteboard",
    "NSPopUpButton",
    "NSPopUpButtonCell",
    "NSPrintInfo",
    "NSPrintOperation",
    "NSPrintPanel",
    "NSPrinter",
    "NSProgressIndicator",
    "NSQuickDrawView",
    "NSResponder",
    "NSRulerMarker",
    "NSRulerView",
    "NSSavePanel",
    "NSScreen",
    "NSScrollView",
    "NSScroller",
    "NSSearchField",
    "NSSearchFieldCell",
    "NSSecureTextField",
    "NSSecureTextFieldCell",
    "NSSegmentedCell",
    "NSSegmentedControl",
    "NSShadow",
    "NSSimpleHorizontalTypesetter",
    "NSSlider",
    "NSSliderCell",
    "NSSound",
    "NSSpeechRecognizer",
    "NSSpeechSynthesizer",
    "NSSpellChecker",
    "NSSplitView",
    "NSStatusBar",
    "NSStatusItem",
    "NSStepper",
    "NSStepperCell",
    "NSTabView",
    "NSTabViewItem",
    "NSTableColumn",
    "NSTableHeaderCell",
    "NSTableHeaderView",
    "NSTableView",
    "NSText",
    "NSTextAttachment",
    "NSTextAttachmentCell",
    "NSTextContainer",
    "NSTextField",
    "NSTextFieldCell",
    "NSTextStorage",
    "NSTextTab",
    "NSTextView",
    "NSToolbar",
    "NSToolbarItem",
    "NSTypesetter",
    "NSUserDefaultsController",
    "NSView",
    "NSWindow",
    "NSWindowController",
    "NSWorkspace",
];

pub const APPKIT_PROTOCOLS: &[&str] = &[
    "NSAccessibility",
    "NSAnimationDelegate",
    "NSApplicationDelegate",
    "NSChangeSpelling",
    "NSColorPickingCustom",
    "NSColorPickingDefault",
    "NSComboBoxCellDataSource",
    "NSComboBoxDataSource",
    "NSDraggingDestination",
    "NSDraggingInfo",
    "NSDraggingSource",
    "NSEditor",
    "NSEditorRegistration",
    "NSGlyphStorage",
    "NSIgnoreMisspelledWords",
    "NSInputServerMouseTracker",
    "NSInputServiceProvider",
    "NSKeyValueBindingCreation",
    "NSMenuValidation",
    "NSNibAwaking",
    "NSOutlineViewDataSource",
    "NSOutlineViewDelegate",
    "NSPlaceholders",
    "NSServicesRequests",
    "NSTableDataSource",
    "NSTableViewDelegate",
    "NSTextInput",
    "NSToolTipOwner",
    "NSToolbarItemValidation",
    "NSUserInterfaceValidations",
    "NSValidatedUserInterfaceItem",
    "NSWindowDelegate",
];
